//! CSV header normalisation
//!
//! Input files come from several exports that name the same field
//! differently, and some carry more than one of those names at once.
//! Before deserializing, each known field is bound to exactly one header:
//! the canonical name if present, otherwise the first alias in list order.
//! Every other header naming that field is renamed out of the way.

use csv::StringRecord;

/// A field's canonical header and its accepted aliases, most preferred first
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Column {
    pub const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    /// Preference rank of `header` for this field; 0 is the canonical name
    fn rank(&self, header: &str) -> Option<usize> {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .position(|h| h == header)
    }
}

pub const NAME: Column = Column::new("name", &["Name", "PeopNameInCountry", "People Group"]);
pub const COUNTRY: Column = Column::new("country", &["Country", "Ctry"]);

/// Rewrite `headers` so each column appears once, under its canonical name
pub fn canonical_headers(headers: &StringRecord, columns: &[Column]) -> StringRecord {
    let mut renamed: Vec<String> = headers.iter().map(str::to_string).collect();

    for column in columns {
        let mut hits: Vec<(usize, usize)> = headers
            .iter()
            .enumerate()
            .filter_map(|(i, h)| column.rank(h).map(|rank| (rank, i)))
            .collect();
        hits.sort_unstable();

        for (n, (_, i)) in hits.into_iter().enumerate() {
            renamed[i] = if n == 0 {
                column.name.to_string()
            } else {
                format!("__unused_{}_{}", column.name, i)
            };
        }
    }

    StringRecord::from(renamed)
}

/// Canonical names from `required` with no header in `headers`
pub fn missing_columns(headers: &StringRecord, required: &[Column]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|c| !headers.iter().any(|h| h == c.name))
        .map(|c| c.name)
        .collect()
}
