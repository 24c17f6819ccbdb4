//! Country Capitals Library
//!
//! Static country -> capital coordinate table. This is the least precise
//! tier of people-group geocoding: when nothing better is known, a group
//! is placed at its country's capital.
//!
//! Lookups are exact and case-sensitive against the curated spelling.
//! A small alias list maps older export spellings onto curated keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

mod table;

use table::{BUILTIN_CAPITALS, COUNTRY_ALIASES};

#[derive(Error, Debug)]
pub enum CapitalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid capital row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, CapitalError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capital {
    pub country: String,
    pub capital: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Capital {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Row of a capital override file
#[derive(Debug, Deserialize)]
struct RawCapitalRow {
    country: String,
    #[serde(default)]
    capital: Option<String>,
    latitude: f64,
    longitude: f64,
}

pub struct CapitalTable {
    capitals: HashMap<String, Capital>,
    aliases: HashMap<String, String>,
}

impl CapitalTable {
    pub fn new() -> Self {
        Self {
            capitals: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_builtin() -> Self {
        let mut table = Self::new();
        table.load_builtin();
        table
    }

    fn load_builtin(&mut self) {
        for (country, capital, lat, lon) in BUILTIN_CAPITALS {
            self.insert(Capital {
                country: country.to_string(),
                capital: capital.to_string(),
                latitude: *lat,
                longitude: *lon,
            });
        }

        for (alias, country) in COUNTRY_ALIASES {
            self.aliases.insert(alias.to_string(), country.to_string());
        }
    }

    /// Built-in table with entries from a CSV file layered on top.
    ///
    /// The file needs `country`, `latitude` and `longitude` columns; `capital`
    /// is optional. Rows replace built-in entries with the same country.
    pub fn with_overrides(path: impl AsRef<Path>) -> Result<Self> {
        let mut table = Self::with_builtin();
        let loaded = table.load_csv(path)?;
        info!("Capital table: {} built-in, {} overrides", BUILTIN_CAPITALS.len(), loaded);
        Ok(table)
    }

    /// Load capitals from a CSV file, returning how many rows were applied.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        info!("Loading capital overrides from {:?}", path);

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut loaded = 0;
        for (i, row) in reader.deserialize::<RawCapitalRow>().enumerate() {
            // header is line 1
            let row_number = i + 2;
            let row = row?;

            if row.country.is_empty() {
                return Err(CapitalError::InvalidRow {
                    row: row_number,
                    reason: "empty country".to_string(),
                });
            }
            if !(-90.0..=90.0).contains(&row.latitude) || !row.latitude.is_finite() {
                return Err(CapitalError::InvalidRow {
                    row: row_number,
                    reason: format!("latitude {} out of range", row.latitude),
                });
            }
            if !(-180.0..=180.0).contains(&row.longitude) || !row.longitude.is_finite() {
                return Err(CapitalError::InvalidRow {
                    row: row_number,
                    reason: format!("longitude {} out of range", row.longitude),
                });
            }

            self.insert(Capital {
                capital: row.capital.unwrap_or_default(),
                country: row.country,
                latitude: row.latitude,
                longitude: row.longitude,
            });
            loaded += 1;
        }

        Ok(loaded)
    }

    pub fn insert(&mut self, capital: Capital) {
        self.capitals.insert(capital.country.clone(), capital);
    }

    pub fn get(&self, country: &str) -> Option<&Capital> {
        if let Some(capital) = self.capitals.get(country) {
            return Some(capital);
        }

        let canonical = self.aliases.get(country)?;
        debug!(alias = %country, country = %canonical, "Capital lookup via alias");
        self.capitals.get(canonical)
    }

    /// Capital coordinates for a country, keyed exactly as curated.
    pub fn lookup_capital(&self, country: &str) -> Option<(f64, f64)> {
        self.get(country).map(Capital::coordinates)
    }

    pub fn len(&self) -> usize {
        self.capitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capitals.is_empty()
    }
}

impl Default for CapitalTable {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lookup() {
        let table = CapitalTable::with_builtin();
        assert_eq!(table.lookup_capital("Turkmenistan"), Some((37.9601, 58.3261)));
        assert_eq!(table.get("Russia").map(|c| c.capital.as_str()), Some("Moscow"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = CapitalTable::with_builtin();
        assert!(table.lookup_capital("turkmenistan").is_none());
        assert!(table.lookup_capital(" Turkmenistan").is_none());
    }

    #[test]
    fn test_unknown_country() {
        let table = CapitalTable::with_builtin();
        assert!(table.lookup_capital("Atlantis").is_none());
    }

    #[test]
    fn test_alias_resolves_to_curated_entry() {
        let table = CapitalTable::with_builtin();
        assert_eq!(table.lookup_capital("Myanmar (Burma)"), table.lookup_capital("Myanmar"));
        assert!(table.lookup_capital("Ivory Coast").is_some());
    }

    #[test]
    fn test_builtin_coordinates_in_range() {
        let table = CapitalTable::with_builtin();
        assert_eq!(table.len(), BUILTIN_CAPITALS.len());
        for (country, _, lat, lon) in BUILTIN_CAPITALS {
            assert!((-90.0..=90.0).contains(lat), "{} latitude {}", country, lat);
            assert!((-180.0..=180.0).contains(lon), "{} longitude {}", country, lon);
        }
        for (alias, country) in COUNTRY_ALIASES {
            assert!(table.get(country).is_some(), "alias {} points at unknown {}", alias, country);
        }
    }

    #[test]
    fn test_overrides_replace_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "country,capital,latitude,longitude").unwrap();
        writeln!(file, "Turkmenistan,Ashgabat,38.0,58.0").unwrap();
        writeln!(file, "Atlantis,,10.5,-20.25").unwrap();

        let table = CapitalTable::with_overrides(file.path()).unwrap();
        assert_eq!(table.lookup_capital("Turkmenistan"), Some((38.0, 58.0)));
        assert_eq!(table.lookup_capital("Atlantis"), Some((10.5, -20.25)));
    }

    #[test]
    fn test_override_out_of_range_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "country,capital,latitude,longitude").unwrap();
        writeln!(file, "Nowhere,Nowhere,91.0,0.0").unwrap();

        match CapitalTable::with_overrides(file.path()) {
            Err(CapitalError::InvalidRow { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected InvalidRow, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_missing_override_file() {
        let result = CapitalTable::with_overrides("/nonexistent/capitals.csv");
        assert!(result.is_err());
    }
}
