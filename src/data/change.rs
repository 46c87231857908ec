use log::warn;

use super::model::{Party, Term, TimeSeriesStore};

/// Which boundary month had no figure in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingBoundary {
    Start,
    End,
    Both,
}

/// Job change over one term, in thousands.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub name: String,
    pub party: Party,
    /// End figure minus start figure; `0.0` when a boundary is missing.
    pub change: f64,
    pub missing: Option<MissingBoundary>,
}

impl ChangeRecord {
    pub fn is_complete(&self) -> bool {
        self.missing.is_none()
    }
}

/// Difference between the figures at the term's end and start months.
///
/// A missing boundary is an expected data gap: it is logged against the term
/// name and the term contributes a change of zero.
pub fn compute_change(term: &Term, store: &TimeSeriesStore) -> ChangeRecord {
    let start = store.lookup(term.start.year, term.start.month);
    let end = store.lookup(term.end.year, term.end.month);

    let (change, missing) = match (start, end) {
        (Some(start), Some(end)) => (end - start, None),
        (None, Some(_)) => (0.0, Some(MissingBoundary::Start)),
        (Some(_), None) => (0.0, Some(MissingBoundary::End)),
        (None, None) => (0.0, Some(MissingBoundary::Both)),
    };

    if missing.is_some() {
        warn!(
            "Missing data for {} ({} to {}). Check dates.",
            term.name, term.start, term.end
        );
    }

    ChangeRecord {
        name: term.name.clone(),
        party: term.party.clone(),
        change,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MonthKey;
    use crate::test_support::{init_test_logging, take_warnings};

    fn term(party: &str) -> Term {
        Term {
            name: "X".to_string(),
            party: Party::from_label(party),
            start: MonthKey::new(2001, 1),
            end: MonthKey::new(2001, 12),
        }
    }

    #[test]
    fn change_is_end_minus_start() {
        init_test_logging();
        let store = TimeSeriesStore::from_entries([
            (MonthKey::new(2001, 1), 1000.0),
            (MonthKey::new(2001, 12), 1050.0),
        ]);

        let record = compute_change(&term("R"), &store);
        assert_eq!(record.name, "X");
        assert_eq!(record.party, Party::Republican);
        assert_eq!(record.change, 50.0);
        assert!(record.is_complete());
        assert!(take_warnings().is_empty());
    }

    #[test]
    fn change_is_not_rounded() {
        let store = TimeSeriesStore::from_entries([
            (MonthKey::new(2001, 1), 100.25),
            (MonthKey::new(2001, 12), 99.5),
        ]);
        assert_eq!(compute_change(&term("D"), &store).change, 99.5 - 100.25);
    }

    #[test]
    fn missing_end_degrades_to_zero() {
        init_test_logging();
        let store = TimeSeriesStore::from_entries([(MonthKey::new(2001, 1), 1000.0)]);

        let record = compute_change(&term("R"), &store);
        assert_eq!(record.change, 0.0);
        assert_eq!(record.missing, Some(MissingBoundary::End));

        let warnings = take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Missing data for X"));
    }

    #[test]
    fn missing_start_or_both_degrade_to_zero() {
        let store = TimeSeriesStore::from_entries([(MonthKey::new(2001, 12), 1050.0)]);
        let record = compute_change(&term("D"), &store);
        assert_eq!(record.change, 0.0);
        assert_eq!(record.missing, Some(MissingBoundary::Start));

        let record = compute_change(&term("D"), &TimeSeriesStore::default());
        assert_eq!(record.change, 0.0);
        assert_eq!(record.missing, Some(MissingBoundary::Both));
    }
}
