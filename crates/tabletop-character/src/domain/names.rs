//! Name-frequency corpora and weighted name sampling.
//!
//! A corpus is line-oriented text where every usable line carries a quoted
//! name followed by a frequency such as `"Ola" 1.234`. The frequency's digits
//! are read as an integer weight (1.234 becomes 1234). Lines that do not
//! match, and names of zero weight, are skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tabletop_core::error::DomainError;
use tabletop_core::rng::DeterministicRng;
use tracing::debug;

static CORPUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)" ([0-9])\.([0-9]{3})"#).expect("corpus line pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    /// Running total of weights up to and including this entry.
    cumulative: u32,
}

/// A cumulative-frequency table for weighted name sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDistribution {
    entries: Vec<Entry>,
}

impl NameDistribution {
    /// Builds a table from corpus text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut total: u32 = 0;
        for captures in text.lines().filter_map(|line| CORPUS_LINE.captures(line)) {
            let weight = digits(&captures[2]) * 1000 + digits(&captures[3]);
            if weight == 0 {
                continue;
            }
            total = total.saturating_add(weight);
            entries.push(Entry {
                name: captures[1].to_owned(),
                cumulative: total,
            });
        }
        Self { entries }
    }

    /// Reads and parses a corpus file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let bytes = std::fs::read(path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to read name corpus {}: {e}",
                path.display()
            ))
        })?;
        let table = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), names = table.len(), "loaded name corpus");
        Ok(table)
    }

    /// Number of usable names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no usable names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.entries.last().map_or(0, |entry| entry.cumulative)
    }

    /// Draws a name with probability proportional to its weight.
    ///
    /// Returns `None` for an empty table.
    pub fn sample(&self, rng: &mut dyn DeterministicRng) -> Option<&str> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let point = rng.next_u32_range(0, total - 1);
        // Entry i owns the half-open mass [cumulative[i-1], cumulative[i]).
        let index = match self
            .entries
            .binary_search_by_key(&point, |entry| entry.cumulative)
        {
            Ok(hit) => hit + 1,
            Err(insertion) => insertion,
        };
        self.entries.get(index).map(|entry| entry.name.as_str())
    }
}

fn digits(text: &str) -> u32 {
    text.bytes()
        .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
}

/// The male and female corpora used for generated names.
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    /// Corpus drawn from for male names.
    pub male: NameDistribution,
    /// Corpus drawn from for female names.
    pub female: NameDistribution,
}

impl NameTables {
    /// Pairs two already-built tables.
    #[must_use]
    pub fn new(male: NameDistribution, female: NameDistribution) -> Self {
        Self { male, female }
    }

    /// Loads both corpora from disk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if either file cannot be read.
    pub fn load(male: &Path, female: &Path) -> Result<Self, DomainError> {
        Ok(Self::new(
            NameDistribution::from_file(male)?,
            NameDistribution::from_file(female)?,
        ))
    }

    /// Flips a coin weighted by `p_female` to pick a corpus, then draws a
    /// name from it.
    pub fn draw(&self, rng: &mut dyn DeterministicRng, p_female: f64) -> Option<&str> {
        if rng.next_f64() < p_female {
            self.female.sample(rng)
        } else {
            self.male.sample(rng)
        }
    }
}
