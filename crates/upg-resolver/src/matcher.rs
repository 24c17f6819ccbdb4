//! Registry candidate disambiguation
//!
//! Records outside the query country are dropped first. The remaining
//! records go through the naming rules in order; the first rule with at
//! least one hit decides the tier and no later rule is consulted.
//!
//! 1. Exact: localized name equals the query name
//! 2. Partial: query name is a substring of the localized name
//! 3. AltName: query name equals one alternate name
//! 4. FirstInCountry: first same-country record (only when enabled)

use crate::registry::RegistryRecord;
use crate::validator::{validate, InvalidCoordinate};
use crate::{eq_ignore_case, Candidate, LookupQuery, SourceTier};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    Exact,
    Partial,
    AltName,
    FirstInCountry,
}

/// Naming rules that always run, in precedence order
pub const NAME_RULES: [NameRule; 3] = [NameRule::Exact, NameRule::Partial, NameRule::AltName];

impl NameRule {
    pub fn tier(&self) -> SourceTier {
        match self {
            NameRule::Exact => SourceTier::RegistryExact,
            NameRule::Partial => SourceTier::RegistryPartial,
            NameRule::AltName => SourceTier::RegistryAltName,
            NameRule::FirstInCountry => SourceTier::RegistryFirstInCountry,
        }
    }

    /// `query_name` must already be lowercased
    pub fn matches(&self, record: &RegistryRecord, query_name: &str) -> bool {
        let name = record.name.as_deref().unwrap_or_default().to_lowercase();
        match self {
            NameRule::Exact => !name.is_empty() && name == query_name,
            NameRule::Partial => !query_name.is_empty() && name.contains(query_name),
            NameRule::AltName => record
                .alt_names()
                .any(|alt| alt.to_lowercase() == query_name),
            NameRule::FirstInCountry => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched {
        candidate: Candidate,
        in_country: usize,
    },
    NoCountryCandidates,
    NoNameMatch {
        in_country: usize,
    },
    /// The winning rule matched, but none of its records had usable coordinates
    InvalidCoordinates {
        tier: SourceTier,
        in_country: usize,
        reasons: Vec<InvalidCoordinate>,
    },
}

/// Records whose country equals the query country, in response order
pub fn filter_country<'a>(records: &'a [RegistryRecord], country: &str) -> Vec<&'a RegistryRecord> {
    records
        .iter()
        .filter(|r| {
            r.country
                .as_deref()
                .is_some_and(|c| eq_ignore_case(c.trim(), country))
        })
        .collect()
}

pub fn match_candidates(
    records: &[RegistryRecord],
    query: &LookupQuery,
    accept_first_in_country: bool,
) -> MatchOutcome {
    let in_country = filter_country(records, query.country());
    if in_country.is_empty() {
        debug!(%query, returned = records.len(), "No registry records in country");
        return MatchOutcome::NoCountryCandidates;
    }

    let query_name = query.name().to_lowercase();
    let mut rules = NAME_RULES.to_vec();
    if accept_first_in_country {
        rules.push(NameRule::FirstInCountry);
    }

    for rule in rules {
        let hits: Vec<&RegistryRecord> = in_country
            .iter()
            .copied()
            .filter(|r| rule.matches(r, &query_name))
            .collect();
        if hits.is_empty() {
            continue;
        }

        debug!(%query, ?rule, hits = hits.len(), "Registry naming rule matched");
        return take_first_valid(&hits, rule.tier(), in_country.len());
    }

    MatchOutcome::NoNameMatch {
        in_country: in_country.len(),
    }
}

fn take_first_valid(hits: &[&RegistryRecord], tier: SourceTier, in_country: usize) -> MatchOutcome {
    let mut reasons = Vec::new();

    for record in hits {
        match validate(record.latitude.as_deref(), record.longitude.as_deref()) {
            Ok((latitude, longitude)) => {
                return MatchOutcome::Matched {
                    candidate: Candidate {
                        latitude,
                        longitude,
                        population: record.population.clone(),
                        evangelical_percent: record.evangelical_percent.clone(),
                        language: record.language.clone(),
                        religion: record.religion.clone(),
                        description: record.description.clone(),
                        source_tier: tier,
                    },
                    in_country,
                };
            }
            Err(e) => reasons.push(e),
        }
    }

    MatchOutcome::InvalidCoordinates {
        tier,
        in_country,
        reasons,
    }
}
