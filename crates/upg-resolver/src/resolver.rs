//! Resolution orchestrator
//!
//! Runs each query through the tiers in fixed order:
//!
//! ```text
//! START -> REGISTRY -> LOCAL -> CAPITAL -> (DONE | FAILED)
//! ```
//!
//! Queries are processed one at a time. Every registry call is followed by
//! a fixed pause; the local and capital tiers make no network call and are
//! not paced.

use crate::events::{ResolutionEvent, ResolutionObserver, TracingObserver};
use crate::local::LocalDataset;
use crate::registry::{lookup_registry, RegistrySource};
use crate::validator::validate_pair;
use crate::{
    Candidate, LookupQuery, ResolveError, ResolvedRecord, SourceTier, DEFAULT_MAX_CANDIDATES,
    DEFAULT_REQUEST_DELAY_SECS,
};
use country_capitals::CapitalTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Orchestrator settings, fixed for the lifetime of a run
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Pause after every registry call
    pub request_delay: Duration,
    /// Registry records requested per query
    pub max_candidates: usize,
    /// Enable the REGISTRY_FIRST_IN_COUNTRY last-resort tier
    pub accept_first_in_country: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs_f64(DEFAULT_REQUEST_DELAY_SECS),
            max_candidates: DEFAULT_MAX_CANDIDATES,
            accept_first_in_country: false,
        }
    }
}

impl ResolverConfig {
    /// Convert a user-supplied delay in seconds, rejecting values a `Duration` cannot hold
    pub fn delay_from_secs(secs: f64) -> crate::Result<Duration> {
        Duration::try_from_secs_f64(secs)
            .map_err(|e| ResolveError::Config(format!("invalid delay {secs}: {e}")))
    }
}

/// Run-level counters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionStats {
    pub total: usize,
    /// Input rows dropped before resolution (blank name or country)
    pub skipped: usize,
    pub resolved_registry: usize,
    pub resolved_local: usize,
    pub resolved_capital: usize,
    pub failed: usize,
    pub by_tier: BTreeMap<SourceTier, usize>,
}

impl ResolutionStats {
    pub fn resolved(&self) -> usize {
        self.resolved_registry + self.resolved_local + self.resolved_capital
    }

    fn record(&mut self, tier: Option<SourceTier>) {
        self.total += 1;
        let Some(tier) = tier else {
            self.failed += 1;
            return;
        };

        match tier {
            t if t.is_registry() => self.resolved_registry += 1,
            SourceTier::LocalDataset => self.resolved_local += 1,
            _ => self.resolved_capital += 1,
        }
        *self.by_tier.entry(tier).or_default() += 1;
    }
}

/// Records and unresolved queries from a batch run
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub records: Vec<ResolvedRecord>,
    pub unresolved: Vec<LookupQuery>,
}

#[derive(Debug)]
enum Stage {
    Start,
    Registry,
    Local,
    Capital,
    Done(Candidate),
    Failed,
}

pub struct Resolver {
    registry: Arc<dyn RegistrySource>,
    local: LocalDataset,
    capitals: CapitalTable,
    config: ResolverConfig,
    observer: Arc<dyn ResolutionObserver>,
    stats: ResolutionStats,
}

impl Resolver {
    pub fn new(
        registry: Arc<dyn RegistrySource>,
        local: LocalDataset,
        capitals: CapitalTable,
        config: ResolverConfig,
    ) -> Self {
        Self {
            registry,
            local,
            capitals,
            config,
            observer: Arc::new(TracingObserver),
            stats: ResolutionStats::default(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn stats(&self) -> &ResolutionStats {
        &self.stats
    }

    /// Count input rows that never became queries
    pub fn record_skipped(&mut self, skipped: usize) {
        self.stats.skipped += skipped;
    }

    /// Resolve one query. `None` means every tier was exhausted.
    pub async fn resolve(&mut self, query: &LookupQuery) -> Option<ResolvedRecord> {
        let mut stage = Stage::Start;

        let record = loop {
            stage = match stage {
                Stage::Start => Stage::Registry,
                Stage::Registry => match self.registry_tier(query).await {
                    Some(candidate) => Stage::Done(candidate),
                    None => Stage::Local,
                },
                Stage::Local => match self.local_tier(query) {
                    Some(candidate) => Stage::Done(candidate),
                    None => Stage::Capital,
                },
                Stage::Capital => match self.capital_tier(query) {
                    Some(candidate) => Stage::Done(candidate),
                    None => Stage::Failed,
                },
                Stage::Done(candidate) => {
                    break Some(ResolvedRecord::from_candidate(query, candidate));
                }
                Stage::Failed => break None,
            };
        };

        match &record {
            Some(r) => self.observer.on_event(&ResolutionEvent::Resolved {
                query: query.clone(),
                tier: r.tier,
                latitude: r.latitude,
                longitude: r.longitude,
            }),
            None => self.observer.on_event(&ResolutionEvent::Unresolved {
                query: query.clone(),
            }),
        }
        self.stats.record(record.as_ref().map(|r| r.tier));

        record
    }

    /// Resolve queries strictly in order
    pub async fn resolve_all(&mut self, queries: &[LookupQuery]) -> RunOutcome {
        let mut outcome = RunOutcome::default();

        for (i, query) in queries.iter().enumerate() {
            debug!("[{}/{}] {}", i + 1, queries.len(), query);
            match self.resolve(query).await {
                Some(record) => outcome.records.push(record),
                None => outcome.unresolved.push(query.clone()),
            }
        }

        info!(
            "Resolved {} of {} queries ({} unresolved)",
            outcome.records.len(),
            queries.len(),
            outcome.unresolved.len()
        );

        outcome
    }

    async fn registry_tier(&self, query: &LookupQuery) -> Option<Candidate> {
        let candidate = lookup_registry(
            self.registry.as_ref(),
            query,
            self.config.max_candidates,
            self.config.accept_first_in_country,
            self.observer.as_ref(),
        )
        .await;

        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }

        candidate
    }

    fn capital_tier(&self, query: &LookupQuery) -> Option<Candidate> {
        let (lat, lon) = self.capitals.lookup_capital(query.country())?;
        match validate_pair(lat, lon) {
            Ok((lat, lon)) => Some(Candidate::coordinates_only(
                lat,
                lon,
                SourceTier::CapitalFallback,
            )),
            Err(e) => {
                self.observer.on_event(&ResolutionEvent::CandidateRejected {
                    query: query.clone(),
                    tier: SourceTier::CapitalFallback,
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    fn local_tier(&self, query: &LookupQuery) -> Option<Candidate> {
        match self.local.lookup_local(query) {
            Ok(candidate) => candidate,
            Err(e) => {
                self.observer.on_event(&ResolutionEvent::CandidateRejected {
                    query: query.clone(),
                    tier: SourceTier::LocalDataset,
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingObserver;
    use crate::local::LocalRow;
    use crate::registry::{RegistryError, RegistryRecord};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned records and counts calls
    #[derive(Default)]
    struct StubRegistry {
        records: Vec<RegistryRecord>,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RegistrySource for StubRegistry {
        async fn fetch_people_groups(
            &self,
            _query: &LookupQuery,
            _limit: usize,
        ) -> Result<Vec<RegistryRecord>, RegistryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RegistryError::Transport("timed out".into()));
            }
            Ok(self.records.clone())
        }
    }

    fn registry_record(name: &str, country: &str, lat: &str, lon: &str) -> RegistryRecord {
        RegistryRecord {
            name: Some(name.into()),
            country: Some(country.into()),
            latitude: Some(lat.into()),
            longitude: Some(lon.into()),
            population: Some("170000".into()),
            ..Default::default()
        }
    }

    fn local_row(name: &str, country: &str, lat: &str, lon: &str) -> LocalRow {
        LocalRow {
            name: name.into(),
            country: country.into(),
            latitude: Some(lat.into()),
            longitude: Some(lon.into()),
            religion: Some("Islam".into()),
            ..Default::default()
        }
    }

    fn no_delay() -> ResolverConfig {
        ResolverConfig {
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    fn resolver(registry: StubRegistry, local: Vec<LocalRow>) -> Resolver {
        Resolver::new(
            Arc::new(registry),
            LocalDataset::from_rows(local),
            CapitalTable::with_builtin(),
            no_delay(),
        )
    }

    #[tokio::test]
    async fn test_registry_beats_local() {
        let registry = StubRegistry {
            records: vec![registry_record("Lak", "Russia", "42.0", "47.5")],
            ..Default::default()
        };
        let mut resolver = resolver(registry, vec![local_row("Lak", "Russia", "10.0", "10.0")]);

        let record = resolver.resolve(&LookupQuery::new("Lak", "Russia")).await.unwrap();
        assert_eq!(record.tier, SourceTier::RegistryExact);
        assert_eq!(record.latitude, 42.0);
        assert_eq!(record.population, "170000");
        assert_eq!(resolver.stats().resolved_registry, 1);
    }

    #[tokio::test]
    async fn test_registry_failure_falls_to_local() {
        let registry = StubRegistry {
            fail: true,
            ..Default::default()
        };
        let mut resolver = resolver(registry, vec![local_row("lak", "RUSSIA", "42.1", "47.2")]);

        let record = resolver.resolve(&LookupQuery::new("Lak", "Russia")).await.unwrap();
        assert_eq!(record.tier, SourceTier::LocalDataset);
        assert_eq!(record.religion, "Islam");
        assert_eq!(record.population, "");
    }

    #[tokio::test]
    async fn test_invalid_local_falls_to_capital() {
        let observer = Arc::new(RecordingObserver::new());
        let mut resolver = resolver(
            StubRegistry::default(),
            vec![local_row("Lak", "Russia", "420", "47.2")],
        )
        .with_observer(observer.clone());

        let record = resolver.resolve(&LookupQuery::new("Lak", "Russia")).await.unwrap();
        assert_eq!(record.tier, SourceTier::CapitalFallback);
        assert_eq!((record.latitude, record.longitude), (55.7558, 37.6173));
        assert_eq!(record.religion, "");
        assert!(observer.events().iter().any(|e| matches!(
            e,
            ResolutionEvent::CandidateRejected { tier: SourceTier::LocalDataset, .. }
        )));
    }

    #[tokio::test]
    async fn test_exhaustion_counts_failure() {
        let mut resolver = resolver(StubRegistry::default(), Vec::new());

        let result = resolver.resolve(&LookupQuery::new("Nobody", "Atlantis")).await;
        assert!(result.is_none());
        assert_eq!(resolver.stats().failed, 1);
        assert_eq!(resolver.stats().total, 1);
        assert_eq!(resolver.stats().resolved(), 0);
    }

    #[tokio::test]
    async fn test_resolve_all_keeps_order_and_counts() {
        let registry = StubRegistry {
            records: vec![registry_record("Lak, Caucasus", "Russia", "42.0", "47.5")],
            ..Default::default()
        };
        let mut resolver = resolver(registry, vec![local_row("Avar", "Russia", "42.5", "46.5")]);
        resolver.record_skipped(3);

        let queries = vec![
            LookupQuery::new("Lak", "Russia"),
            LookupQuery::new("Avar", "Russia"),
            LookupQuery::new("Chechen", "Russia"),
            LookupQuery::new("Nobody", "Atlantis"),
        ];
        let outcome = resolver.resolve_all(&queries).await;

        let tiers: Vec<_> = outcome.records.iter().map(|r| r.tier).collect();
        assert_eq!(
            tiers,
            vec![
                SourceTier::RegistryPartial,
                SourceTier::LocalDataset,
                SourceTier::CapitalFallback,
            ]
        );
        assert_eq!(outcome.unresolved, vec![LookupQuery::new("Nobody", "Atlantis")]);

        let stats = resolver.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.resolved_registry, 1);
        assert_eq!(stats.resolved_local, 1);
        assert_eq!(stats.resolved_capital, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.by_tier.get(&SourceTier::RegistryPartial), Some(&1));
    }

    fn paced(registry: Arc<StubRegistry>, delay: Duration) -> Resolver {
        let config = ResolverConfig {
            request_delay: delay,
            ..Default::default()
        };
        Resolver::new(
            registry,
            LocalDataset::from_rows(vec![local_row("B", "Russia", "42.5", "46.5")]),
            CapitalTable::with_builtin(),
            config,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacing_after_each_registry_call() {
        let registry = Arc::new(StubRegistry::default());
        let mut resolver = paced(registry.clone(), Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        let outcome = resolver
            .resolve_all(&[
                LookupQuery::new("A", "Russia"),
                LookupQuery::new("B", "Russia"),
                LookupQuery::new("C", "Atlantis"),
            ])
            .await;

        // local, capital and unresolved paths add no extra wait
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(registry.calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_registry_calls_are_paced() {
        let registry = Arc::new(StubRegistry {
            fail: true,
            ..Default::default()
        });
        let mut resolver = paced(registry.clone(), Duration::from_millis(1500));

        let start = tokio::time::Instant::now();
        resolver
            .resolve_all(&[LookupQuery::new("A", "Russia"), LookupQuery::new("B", "Russia")])
            .await;

        assert_eq!(registry.calls.load(Ordering::SeqCst), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_delay_from_secs() {
        assert_eq!(
            ResolverConfig::delay_from_secs(1.5).unwrap(),
            Duration::from_millis(1500)
        );
        assert_eq!(ResolverConfig::delay_from_secs(0.0).unwrap(), Duration::ZERO);
        for bad in [1e30, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ResolverConfig::delay_from_secs(bad),
                Err(ResolveError::Config(_))
            ));
        }
    }

    #[test]
    fn test_stats_serialize_tier_keys() {
        let mut stats = ResolutionStats::default();
        stats.record(Some(SourceTier::RegistryAltName));
        stats.record(None);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_tier"]["REGISTRY_ALTNAME"], 1);
        assert_eq!(json["failed"], 1);
    }
}
