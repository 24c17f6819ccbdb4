//! People-Group Coordinate Resolver
//!
//! Enriches (people group, country) pairs with coordinates and demographic
//! attributes, trying progressively less precise sources in a fixed order.
//!
//! # Tier Precedence
//!
//! ```text
//! REGISTRY_EXACT > REGISTRY_PARTIAL > REGISTRY_ALTNAME
//!     > [REGISTRY_FIRST_IN_COUNTRY] > LOCAL_DATASET > CAPITAL_FALLBACK
//! ```
//!
//! | Tier                      | Source                  | Match rule                          |
//! |---------------------------|-------------------------|-------------------------------------|
//! | REGISTRY_EXACT            | People-group registry   | Localized name equals query name    |
//! | REGISTRY_PARTIAL          | People-group registry   | Query name inside localized name    |
//! | REGISTRY_ALTNAME          | People-group registry   | Query name in alternate-name list   |
//! | REGISTRY_FIRST_IN_COUNTRY | People-group registry   | First same-country record (opt-in)  |
//! | LOCAL_DATASET             | Local reference CSV     | Exact name + country                |
//! | CAPITAL_FALLBACK          | Capital table           | Country only, no demographics       |
//!
//! The first candidate with valid coordinates wins; nothing below it is
//! consulted. All name and country comparisons are case-insensitive except
//! the capital table, which is keyed exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub mod columns;
pub mod events;
pub mod loader;
pub mod local;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod validator;

pub use events::{RecordingObserver, ResolutionEvent, ResolutionObserver, TracingObserver};
pub use local::LocalDataset;
pub use registry::{HttpRegistryClient, RegistryConfig, RegistryError, RegistryRecord, RegistrySource};
pub use resolver::{ResolutionStats, Resolver, ResolverConfig, RunOutcome};
pub use validator::{validate, InvalidCoordinate};

/// Default pause between registry calls in seconds
pub const DEFAULT_REQUEST_DELAY_SECS: f64 = 1.0;

/// Default cap on registry records requested per query
pub const DEFAULT_MAX_CANDIDATES: usize = 100;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to load dataset {path:?}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// A (people group, country) pair to resolve.
///
/// Both fields are trimmed on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupQuery {
    name: String,
    country: String,
}

impl LookupQuery {
    pub fn new(name: impl AsRef<str>, country: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            country: country.as_ref().trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Both name and country are non-empty
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.country.is_empty()
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}

/// Source and precision of a resolved coordinate.
///
/// Variants are declared best-first, so `Ord` follows precedence:
/// a smaller tier always beats a larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceTier {
    RegistryExact,
    RegistryPartial,
    #[serde(rename = "REGISTRY_ALTNAME")]
    RegistryAltName,
    RegistryFirstInCountry,
    LocalDataset,
    CapitalFallback,
}

impl SourceTier {
    pub const ALL: [SourceTier; 6] = [
        SourceTier::RegistryExact,
        SourceTier::RegistryPartial,
        SourceTier::RegistryAltName,
        SourceTier::RegistryFirstInCountry,
        SourceTier::LocalDataset,
        SourceTier::CapitalFallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegistryExact => "REGISTRY_EXACT",
            Self::RegistryPartial => "REGISTRY_PARTIAL",
            Self::RegistryAltName => "REGISTRY_ALTNAME",
            Self::RegistryFirstInCountry => "REGISTRY_FIRST_IN_COUNTRY",
            Self::LocalDataset => "LOCAL_DATASET",
            Self::CapitalFallback => "CAPITAL_FALLBACK",
        }
    }

    pub fn is_registry(&self) -> bool {
        matches!(
            self,
            Self::RegistryExact
                | Self::RegistryPartial
                | Self::RegistryAltName
                | Self::RegistryFirstInCountry
        )
    }
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated coordinate plus whatever attributes the source knew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evangelical_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source_tier: SourceTier,
}

impl Candidate {
    /// Coordinates only, as produced by the capital table
    pub fn coordinates_only(latitude: f64, longitude: f64, source_tier: SourceTier) -> Self {
        Self {
            latitude,
            longitude,
            population: None,
            evangelical_percent: None,
            language: None,
            religion: None,
            description: None,
            source_tier,
        }
    }
}

/// One row of the enriched output dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: String,
    pub evangelical_percent: String,
    pub language: String,
    pub religion: String,
    pub description: String,
    pub tier: SourceTier,
}

impl ResolvedRecord {
    /// Build the output row, defaulting missing attributes to empty strings
    pub fn from_candidate(query: &LookupQuery, candidate: Candidate) -> Self {
        Self {
            name: query.name().to_string(),
            country: query.country().to_string(),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            population: candidate.population.unwrap_or_default(),
            evangelical_percent: candidate.evangelical_percent.unwrap_or_default(),
            language: candidate.language.unwrap_or_default(),
            religion: candidate.religion.unwrap_or_default(),
            description: candidate.description.unwrap_or_default(),
            tier: candidate.source_tier,
        }
    }
}

/// Case-insensitive equality used for names and countries
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
