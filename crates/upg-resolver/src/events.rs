//! Resolution events
//!
//! Each decision the pipeline takes is reported as a [`ResolutionEvent`]
//! to a [`ResolutionObserver`]. The binary logs them through `tracing`;
//! tests collect them with [`RecordingObserver`].

use crate::{LookupQuery, SourceTier};
use serde::Serialize;
use std::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ResolutionEvent {
    /// Registry answered; `in_country` records survived the country filter
    RegistryQueried {
        query: LookupQuery,
        returned: usize,
        in_country: usize,
    },
    /// Transport, status or payload failure, treated as no data
    RegistryUnavailable { query: LookupQuery, error: String },
    /// Same-country records existed but no naming rule matched
    NoNameMatch { query: LookupQuery, in_country: usize },
    /// A candidate was found but its coordinates failed validation
    CandidateRejected {
        query: LookupQuery,
        tier: SourceTier,
        reason: String,
    },
    Resolved {
        query: LookupQuery,
        tier: SourceTier,
        latitude: f64,
        longitude: f64,
    },
    /// All tiers exhausted
    Unresolved { query: LookupQuery },
}

pub trait ResolutionObserver: Send + Sync {
    fn on_event(&self, event: &ResolutionEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        match event {
            ResolutionEvent::RegistryQueried {
                query,
                returned,
                in_country,
            } => debug!(%query, returned, in_country, "Registry queried"),
            ResolutionEvent::RegistryUnavailable { query, error } => {
                warn!(%query, %error, "Registry unavailable, falling back")
            }
            ResolutionEvent::NoNameMatch { query, in_country } => {
                debug!(%query, in_country, "No registry name match")
            }
            ResolutionEvent::CandidateRejected { query, tier, reason } => {
                debug!(%query, %tier, %reason, "Candidate rejected")
            }
            ResolutionEvent::Resolved {
                query,
                tier,
                latitude,
                longitude,
            } => info!(%query, %tier, latitude, longitude, "Resolved"),
            ResolutionEvent::Unresolved { query } => warn!(%query, "Unresolved"),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResolutionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
