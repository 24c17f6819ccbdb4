//! People-Group Enrichment CLI
//!
//! Resolves coordinates and demographics for every (name, country) row of
//! the input file.
//!
//! Usage:
//!   enrich-upgs --input data/CG-Existing-UPG-Q1-2024.csv \
//!               --local-dataset data/updated_uupg.csv \
//!               --output data/existing_upgs_updated.csv

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use country_capitals::CapitalTable;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use upg_resolver::{
    loader, HttpRegistryClient, LocalDataset, RegistryConfig, ResolutionStats, ResolveError,
    Resolver, ResolverConfig, SourceTier, DEFAULT_MAX_CANDIDATES, DEFAULT_REQUEST_DELAY_SECS,
};

#[derive(Parser, Debug)]
#[command(
    name = "enrich-upgs",
    about = "Resolve coordinates and demographics for people-group records"
)]
struct Args {
    /// Input CSV with name and country columns
    #[arg(short, long, default_value = "data/CG-Existing-UPG-Q1-2024.csv")]
    input: PathBuf,

    /// Output CSV of resolved records
    #[arg(short, long, default_value = "data/existing_upgs_updated.csv")]
    output: PathBuf,

    /// Local reference dataset CSV
    #[arg(short = 'l', long, default_value = "data/updated_uupg.csv")]
    local_dataset: PathBuf,

    /// CSV of capital coordinates layered over the built-in table
    #[arg(long)]
    capitals: Option<PathBuf>,

    /// Registry API key
    #[arg(long, env = "JOSHUA_PROJECT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Registry base URL
    #[arg(long, default_value = upg_resolver::registry::DEFAULT_BASE_URL)]
    base_url: String,

    /// Also filter registry requests by people-group name
    #[arg(long)]
    name_filter: bool,

    /// Seconds to wait after each registry call
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY_SECS)]
    delay_secs: f64,

    /// Registry records requested per query
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES)]
    max_candidates: usize,

    /// Fall back to the first same-country registry record when no name matches
    #[arg(long)]
    accept_first_in_country: bool,

    /// Write unresolved queries to this CSV
    #[arg(long)]
    unresolved: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    generated_at: String,
    input: &'a PathBuf,
    output: &'a PathBuf,
    local_dataset: &'a PathBuf,
    accept_first_in_country: bool,
    stats: &'a ResolutionStats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("{}", "=".repeat(60));
    info!("People-Group Enrichment");
    info!("{}", "=".repeat(60));

    let api_key = args
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            ResolveError::Config(
                "registry API key missing (set --api-key or JOSHUA_PROJECT_API_KEY)".to_string(),
            )
        })?;

    let request_delay = ResolverConfig::delay_from_secs(args.delay_secs)?;
    if args.max_candidates == 0 {
        return Err(ResolveError::Config("max-candidates must be at least 1".to_string()).into());
    }

    // Reference data is loaded once; failures here abort the run
    let capitals = match &args.capitals {
        Some(path) => CapitalTable::with_overrides(path).map_err(|e| ResolveError::DatasetLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?,
        None => CapitalTable::with_builtin(),
    };
    info!("Capital table: {} countries", capitals.len());

    let local = LocalDataset::load(&args.local_dataset)?;
    let batch = loader::load_queries(&args.input)?;

    let registry = HttpRegistryClient::new(RegistryConfig {
        base_url: args.base_url.clone(),
        api_key,
        name_filter: args.name_filter,
        ..RegistryConfig::default()
    })
    .map_err(|e| ResolveError::Config(e.to_string()))?;

    let config = ResolverConfig {
        request_delay,
        max_candidates: args.max_candidates,
        accept_first_in_country: args.accept_first_in_country,
    };
    info!(
        "Delay {:?} between registry calls, up to {} candidates per query",
        config.request_delay, config.max_candidates
    );

    let mut resolver = Resolver::new(Arc::new(registry), local, capitals, config);
    resolver.record_skipped(batch.skipped);

    let outcome = resolver.resolve_all(&batch.queries).await;

    // Write output
    info!("\nWriting output to {:?}", args.output);
    loader::write_records(&args.output, &outcome.records)?;

    if let Some(path) = &args.unresolved {
        info!("Writing {} unresolved queries to {:?}", outcome.unresolved.len(), path);
        loader::write_unresolved(path, &outcome.unresolved)?;
    }

    let stats = resolver.stats();

    if let Some(path) = &args.report {
        info!("Writing run report to {:?}", path);
        let report = RunReport {
            generated_at: Utc::now().to_rfc3339(),
            input: &args.input,
            output: &args.output,
            local_dataset: &args.local_dataset,
            accept_first_in_country: args.accept_first_in_country,
            stats,
        };
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &report)?;
    }

    // Summary
    info!("\n{}", "=".repeat(60));
    info!("SUMMARY");
    info!("{}", "=".repeat(60));
    info!("Total queries:      {}", stats.total);
    info!("Skipped rows:       {}", stats.skipped);
    info!("Resolved registry:  {}", stats.resolved_registry);
    info!("Resolved local:     {}", stats.resolved_local);
    info!("Resolved capital:   {}", stats.resolved_capital);
    info!("Unresolved:         {}", stats.failed);
    for tier in SourceTier::ALL {
        if let Some(count) = stats.by_tier.get(&tier) {
            info!("  {}: {}", tier, count);
        }
    }

    Ok(())
}
