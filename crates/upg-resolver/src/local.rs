//! Local reference dataset of catalogued people groups
//!
//! Loaded once per run from CSV and never mutated. Lookup is an exact,
//! case-insensitive match on name and country; the first matching row wins.

use crate::columns::{self, Column};
use crate::validator::{validate, InvalidCoordinate};
use crate::{eq_ignore_case, Candidate, LookupQuery, ResolveError, Result, SourceTier};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Local dataset columns and the export headers accepted for each
const LOCAL_COLUMNS: [Column; 10] = [
    columns::NAME,
    columns::COUNTRY,
    Column::new("latitude", &["Latitude", "lat"]),
    Column::new("longitude", &["Longitude", "lon", "lng"]),
    Column::new("population", &["Population"]),
    Column::new(
        "evangelical_percent",
        &["evangelical", "PercentEvangelical", "Evangelical Percent"],
    ),
    Column::new("language", &["PrimaryLanguageName", "Primary Language"]),
    Column::new("religion", &["PrimaryReligion", "Primary Religion"]),
    Column::new("description", &["Description", "Summary"]),
    Column::new("evangelical_engagement", &["Evangelical Engagement"]),
];

/// One row of the reference dataset. Coordinates stay raw until lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalRow {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub evangelical_percent: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evangelical_engagement: Option<String>,
}

impl LocalRow {
    fn matches(&self, query: &LookupQuery) -> bool {
        eq_ignore_case(self.name.trim(), query.name())
            && eq_ignore_case(self.country.trim(), query.country())
    }

    fn to_candidate(&self) -> std::result::Result<Candidate, InvalidCoordinate> {
        let (latitude, longitude) = validate(self.latitude.as_deref(), self.longitude.as_deref())?;
        Ok(Candidate {
            latitude,
            longitude,
            population: non_empty(&self.population),
            evangelical_percent: non_empty(&self.evangelical_percent),
            language: non_empty(&self.language),
            religion: non_empty(&self.religion),
            description: non_empty(&self.description),
            source_tier: SourceTier::LocalDataset,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Default)]
pub struct LocalDataset {
    rows: Vec<LocalRow>,
}

impl LocalDataset {
    pub fn from_rows(rows: Vec<LocalRow>) -> Self {
        Self { rows }
    }

    /// Load the dataset; any read or parse failure is fatal for the run
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading local dataset from {:?}", path);

        let dataset_error = |reason: String| ResolveError::DatasetLoad {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| dataset_error(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| dataset_error(e.to_string()))?;
        let headers = columns::canonical_headers(headers, &LOCAL_COLUMNS);
        let missing = columns::missing_columns(&headers, &[columns::NAME, columns::COUNTRY]);
        if !missing.is_empty() {
            return Err(dataset_error(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }
        reader.set_headers(headers);

        let mut rows = Vec::new();
        for row in reader.deserialize::<LocalRow>() {
            rows.push(row.map_err(|e| dataset_error(e.to_string()))?);
        }

        info!("Loaded {} local dataset rows", rows.len());
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row matching the query, if any
    pub fn find(&self, query: &LookupQuery) -> Option<&LocalRow> {
        self.rows.iter().find(|row| row.matches(query))
    }

    /// `Ok(None)` when no row matches, `Err` when the first match has bad coordinates
    pub fn lookup_local(
        &self,
        query: &LookupQuery,
    ) -> std::result::Result<Option<Candidate>, InvalidCoordinate> {
        let Some(row) = self.find(query) else {
            debug!(%query, "No local dataset row");
            return Ok(None);
        };
        row.to_candidate().map(Some)
    }
}
