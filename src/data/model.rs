use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// MonthKey – one (year, month) observation slot
// ---------------------------------------------------------------------------

/// Calendar month used to key the employment series. `month` is 1-based (Jan = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// Party – label attached to a term
// ---------------------------------------------------------------------------

/// Party affiliation of a term. Only the exact labels `D` and `R` are
/// recognised; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Party {
    Democratic,
    Republican,
    Other(String),
}

impl Party {
    pub fn from_label(label: &str) -> Self {
        match label {
            "D" => Party::Democratic,
            "R" => Party::Republican,
            other => Party::Other(other.to_string()),
        }
    }

    /// The label as it appeared in the term file.
    pub fn label(&self) -> &str {
        match self {
            Party::Democratic => "D",
            Party::Republican => "R",
            Party::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Term – one presidential tenure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub name: String,
    pub party: Party,
    pub start: MonthKey,
    pub end: MonthKey,
}

// ---------------------------------------------------------------------------
// TimeSeriesStore – month-keyed employment figures (thousands)
// ---------------------------------------------------------------------------

/// Immutable month → figure index built once by the loader.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesStore {
    figures: HashMap<MonthKey, f64>,
}

impl TimeSeriesStore {
    /// Later entries for the same month overwrite earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (MonthKey, f64)>) -> Self {
        Self {
            figures: entries.into_iter().collect(),
        }
    }

    /// Figure for the given month, or `None` when the source has no observation.
    pub fn lookup(&self, year: i32, month: u32) -> Option<f64> {
        self.figures.get(&MonthKey::new(year, month)).copied()
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Earliest and latest observed months, if any.
    pub fn span(&self) -> Option<(MonthKey, MonthKey)> {
        let first = self.figures.keys().min()?;
        let last = self.figures.keys().max()?;
        Some((*first, *last))
    }
}

// ---------------------------------------------------------------------------
// TermRegistry – terms in file order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TermRegistry {
    terms: Vec<Term>,
}

impl TermRegistry {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// All terms in the order they were loaded.
    pub fn all_terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
