//! Input query loading and output writing

use crate::columns::{self, COUNTRY, NAME};
use crate::{LookupQuery, ResolveError, ResolvedRecord, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Raw input row, read after header normalisation; other columns are ignored
#[derive(Debug, Deserialize)]
struct RawQueryRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Queries ready for resolution plus how many input rows were unusable
#[derive(Debug, Clone, Default)]
pub struct QueryBatch {
    pub queries: Vec<LookupQuery>,
    pub skipped: usize,
}

/// Load queries from CSV, skipping rows with a blank name or country
pub fn load_queries(path: impl AsRef<Path>) -> Result<QueryBatch> {
    let path = path.as_ref();
    info!("Loading queries from {:?}", path);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = columns::canonical_headers(reader.headers()?, &[NAME, COUNTRY]);
    let missing = columns::missing_columns(&headers, &[NAME, COUNTRY]);
    if !missing.is_empty() {
        return Err(ResolveError::DatasetLoad {
            path: path.to_path_buf(),
            reason: format!("missing required column(s): {}", missing.join(", ")),
        });
    }
    reader.set_headers(headers);

    let mut batch = QueryBatch::default();
    for row in reader.deserialize::<RawQueryRow>() {
        let row = row?;
        let query = LookupQuery::new(
            row.name.unwrap_or_default(),
            row.country.unwrap_or_default(),
        );
        if query.is_complete() {
            batch.queries.push(query);
        } else {
            batch.skipped += 1;
        }
    }

    info!(
        "Loaded {} queries ({} skipped for missing name or country)",
        batch.queries.len(),
        batch.skipped
    );

    Ok(batch)
}

/// Output columns, in order
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "name",
    "country",
    "latitude",
    "longitude",
    "population",
    "evangelical_percent",
    "language",
    "religion",
    "description",
    "tier",
];

/// Write resolved records, one row each, with a header
pub fn write_records(path: impl AsRef<Path>, records: &[ResolvedRecord]) -> Result<()> {
    let path = path.as_ref();
    // header written by hand so an empty run still produces one
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

#[derive(Serialize)]
struct UnresolvedRow<'a> {
    name: &'a str,
    country: &'a str,
}

/// Write queries that exhausted every tier
pub fn write_unresolved(path: impl AsRef<Path>, queries: &[LookupQuery]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["name", "country"])?;
    for query in queries {
        writer.serialize(UnresolvedRow {
            name: query.name(),
            country: query.country(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
