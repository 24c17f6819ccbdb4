//! People-group registry client
//!
//! Queries the Joshua Project people-groups endpoint for one country and
//! returns the raw records. Disambiguation lives in [`crate::matcher`].
//!
//! # Usage
//!
//! ```rust,ignore
//! let client = HttpRegistryClient::new(RegistryConfig::with_api_key(key))?;
//! let records = client.fetch_people_groups(&query, 100).await?;
//! ```

use crate::events::{ResolutionEvent, ResolutionObserver};
use crate::matcher::{match_candidates, MatchOutcome};
use crate::{Candidate, LookupQuery};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://joshuaproject.net/api/v2";

/// Fields requested from the registry
pub const DEFAULT_FIELDS: &str = "PeopleID3,PeopNameInCountry,Ctry,Latitude,Longitude,Population,PercentEvangelical,PrimaryLanguageName,PrimaryReligion,Description,AltNames";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Registry returned status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Registry client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub fields: String,
    /// Also send the people-group name as a server-side filter
    pub name_filter: bool,
    /// Request timeout in seconds
    pub timeout_sec: u64,
}

impl RegistryConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            fields: DEFAULT_FIELDS.to_string(),
            name_filter: false,
            timeout_sec: 30,
        }
    }
}

/// One people-group record as returned by the registry.
///
/// Numeric fields arrive as numbers or strings depending on the endpoint
/// version, so every field is normalised to a trimmed string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    #[serde(rename = "PeopNameInCountry", default, deserialize_with = "string_field")]
    pub name: Option<String>,
    #[serde(rename = "Ctry", default, deserialize_with = "string_field")]
    pub country: Option<String>,
    #[serde(rename = "Latitude", default, deserialize_with = "string_field")]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default, deserialize_with = "string_field")]
    pub longitude: Option<String>,
    #[serde(rename = "Population", default, deserialize_with = "string_field")]
    pub population: Option<String>,
    #[serde(rename = "PercentEvangelical", default, deserialize_with = "string_field")]
    pub evangelical_percent: Option<String>,
    #[serde(rename = "PrimaryLanguageName", default, deserialize_with = "string_field")]
    pub language: Option<String>,
    #[serde(rename = "PrimaryReligion", default, deserialize_with = "string_field")]
    pub religion: Option<String>,
    #[serde(
        rename = "Description",
        alias = "Summary",
        default,
        deserialize_with = "string_field"
    )]
    pub description: Option<String>,
    /// Comma-separated alternate names
    #[serde(rename = "AltNames", default, deserialize_with = "string_field")]
    pub alt_names: Option<String>,
}

impl RegistryRecord {
    pub fn alt_names(&self) -> impl Iterator<Item = &str> {
        self.alt_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn string_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    data: Option<Vec<RegistryRecord>>,
}

/// Decode a registry payload; a missing or null `data` array means no records
pub fn parse_response(body: &str) -> Result<Vec<RegistryRecord>, RegistryError> {
    let response: RegistryResponse = serde_json::from_str(body)
        .map_err(|e| RegistryError::MalformedResponse(e.to_string()))?;
    Ok(response.data.unwrap_or_default())
}

#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Fetch up to `limit` records for the query's country
    async fn fetch_people_groups(
        &self,
        query: &LookupQuery,
        limit: usize,
    ) -> Result<Vec<RegistryRecord>, RegistryError>;
}

/// HTTP client for the registry
pub struct HttpRegistryClient {
    config: RegistryConfig,
    client: reqwest::Client,
}

impl HttpRegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/people_groups", self.config.base_url.trim_end_matches('/'))
    }

    pub fn request_params(&self, query: &LookupQuery, limit: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.config.api_key.clone()),
            ("fields", self.config.fields.clone()),
            ("country", query.country().to_string()),
        ];
        if self.config.name_filter {
            params.push(("peo_name", query.name().to_string()));
        }
        params.push(("limit", limit.to_string()));
        params
    }
}

#[async_trait]
impl RegistrySource for HttpRegistryClient {
    async fn fetch_people_groups(
        &self,
        query: &LookupQuery,
        limit: usize,
    ) -> Result<Vec<RegistryRecord>, RegistryError> {
        let url = self.endpoint();
        debug!(%query, url = %url, limit, "Querying registry");

        let response = self
            .client
            .get(&url)
            .query(&self.request_params(query, limit))
            .send()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        parse_response(&body)
    }
}

/// Registry tier of the pipeline.
///
/// Any failure talking to the registry, an empty answer, or a winning
/// candidate with bad coordinates all come back as `None`.
pub async fn lookup_registry(
    source: &dyn RegistrySource,
    query: &LookupQuery,
    max_candidates: usize,
    accept_first_in_country: bool,
    observer: &dyn ResolutionObserver,
) -> Option<Candidate> {
    let records = match source.fetch_people_groups(query, max_candidates).await {
        Ok(records) => records,
        Err(e) => {
            observer.on_event(&ResolutionEvent::RegistryUnavailable {
                query: query.clone(),
                error: e.to_string(),
            });
            return None;
        }
    };

    // Server may ignore `limit`
    let records = &records[..records.len().min(max_candidates)];

    match match_candidates(records, query, accept_first_in_country) {
        MatchOutcome::Matched { candidate, in_country } => {
            observer.on_event(&ResolutionEvent::RegistryQueried {
                query: query.clone(),
                returned: records.len(),
                in_country,
            });
            Some(candidate)
        }
        MatchOutcome::NoCountryCandidates => {
            observer.on_event(&ResolutionEvent::RegistryQueried {
                query: query.clone(),
                returned: records.len(),
                in_country: 0,
            });
            None
        }
        MatchOutcome::NoNameMatch { in_country } => {
            observer.on_event(&ResolutionEvent::RegistryQueried {
                query: query.clone(),
                returned: records.len(),
                in_country,
            });
            observer.on_event(&ResolutionEvent::NoNameMatch {
                query: query.clone(),
                in_country,
            });
            None
        }
        MatchOutcome::InvalidCoordinates {
            tier,
            in_country,
            reasons,
        } => {
            observer.on_event(&ResolutionEvent::RegistryQueried {
                query: query.clone(),
                returned: records.len(),
                in_country,
            });
            for reason in reasons {
                observer.on_event(&ResolutionEvent::CandidateRejected {
                    query: query.clone(),
                    tier,
                    reason: reason.to_string(),
                });
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingObserver;
    use crate::SourceTier;

    struct FailingRegistry(RegistryError);

    #[async_trait]
    impl RegistrySource for FailingRegistry {
        async fn fetch_people_groups(
            &self,
            _query: &LookupQuery,
            _limit: usize,
        ) -> Result<Vec<RegistryRecord>, RegistryError> {
            Err(self.0.clone())
        }
    }

    struct FixedRegistry(Vec<RegistryRecord>);

    #[async_trait]
    impl RegistrySource for FixedRegistry {
        async fn fetch_people_groups(
            &self,
            _query: &LookupQuery,
            _limit: usize,
        ) -> Result<Vec<RegistryRecord>, RegistryError> {
            Ok(self.0.clone())
        }
    }

    fn record(name: &str, country: &str, lat: &str, lon: &str) -> RegistryRecord {
        RegistryRecord {
            name: Some(name.to_string()),
            country: Some(country.to_string()),
            latitude: Some(lat.to_string()),
            longitude: Some(lon.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_numeric_and_string_fields() {
        let body = r#"{"data": [
            {"PeopNameInCountry": "Lak", "Ctry": "Russia", "Latitude": 42.0, "Longitude": "47.5",
             "Population": 170000, "PercentEvangelical": "0.01", "PrimaryLanguageName": "Lak",
             "PrimaryReligion": "Islam", "Summary": "  Highlanders  ", "AltNames": "Lakku, Kazikumukh"}
        ]}"#;
        let records = parse_response(body).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.latitude.as_deref(), Some("42.0"));
        assert_eq!(r.longitude.as_deref(), Some("47.5"));
        assert_eq!(r.population.as_deref(), Some("170000"));
        assert_eq!(r.description.as_deref(), Some("Highlanders"));
        assert_eq!(r.alt_names().collect::<Vec<_>>(), vec!["Lakku", "Kazikumukh"]);
    }

    #[test]
    fn test_parse_missing_data_is_empty() {
        assert!(parse_response(r#"{"status": "ok"}"#).unwrap().is_empty());
        assert!(parse_response(r#"{"data": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_response("<html>rate limited</html>"),
            Err(RegistryError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(r#"{"data": "nope"}"#),
            Err(RegistryError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_request_params() {
        let mut config = RegistryConfig::with_api_key("secret");
        config.base_url = "https://example.test/api/v2/".to_string();
        let client = HttpRegistryClient::new(config).unwrap();
        let query = LookupQuery::new("Lak", "Russia");

        assert_eq!(client.endpoint(), "https://example.test/api/v2/people_groups");

        let params = client.request_params(&query, 25);
        assert!(params.contains(&("api_key", "secret".to_string())));
        assert!(params.contains(&("country", "Russia".to_string())));
        assert!(params.contains(&("limit", "25".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "peo_name"));
    }

    #[test]
    fn test_request_params_with_name_filter() {
        let mut config = RegistryConfig::with_api_key("secret");
        config.name_filter = true;
        let client = HttpRegistryClient::new(config).unwrap();
        let params = client.request_params(&LookupQuery::new("Lak", "Russia"), 10);
        assert!(params.contains(&("peo_name", "Lak".to_string())));
    }

    #[tokio::test]
    async fn test_transport_failure_is_no_data() {
        let observer = RecordingObserver::new();
        let source = FailingRegistry(RegistryError::Transport("connection reset".into()));
        let query = LookupQuery::new("Lak", "Russia");

        let result = lookup_registry(&source, &query, 10, false, &observer).await;
        assert!(result.is_none());
        assert!(matches!(
            observer.events()[0],
            ResolutionEvent::RegistryUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_status_failure_is_no_data() {
        let observer = RecordingObserver::new();
        let source = FailingRegistry(RegistryError::Status(503));
        let query = LookupQuery::new("Lak", "Russia");
        assert!(lookup_registry(&source, &query, 10, false, &observer).await.is_none());
    }

    #[tokio::test]
    async fn test_max_candidates_enforced_locally() {
        let observer = RecordingObserver::new();
        let source = FixedRegistry(vec![
            record("Avar", "Russia", "42.5", "46.5"),
            record("Lak", "Russia", "42.0", "47.5"),
        ]);
        let query = LookupQuery::new("Lak", "Russia");

        // Only the first record is inside the cap
        assert!(lookup_registry(&source, &query, 1, false, &observer).await.is_none());

        let found = lookup_registry(&source, &query, 2, false, &observer).await.unwrap();
        assert_eq!(found.source_tier, SourceTier::RegistryExact);
    }

    #[tokio::test]
    async fn test_invalid_winner_reports_rejection() {
        let observer = RecordingObserver::new();
        let source = FixedRegistry(vec![record("Lak", "Russia", "", "47.5")]);
        let query = LookupQuery::new("Lak", "Russia");

        assert!(lookup_registry(&source, &query, 10, false, &observer).await.is_none());
        assert!(observer.events().iter().any(|e| matches!(
            e,
            ResolutionEvent::CandidateRejected { tier: SourceTier::RegistryExact, .. }
        )));
    }
}
