use super::change::{compute_change, ChangeRecord};
use super::model::{Party, TermRegistry, TimeSeriesStore};

/// Summed job change for the two tracked parties, in thousands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartyTotals {
    pub democratic: f64,
    pub republican: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    pub totals: PartyTotals,
    /// One record per term, in registry order.
    pub details: Vec<ChangeRecord>,
}

impl AggregationResult {
    /// Records whose change was zeroed because a boundary month was absent.
    pub fn incomplete(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.details.iter().filter(|r| !r.is_complete())
    }

    /// Records excluded from both party totals.
    pub fn untallied(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.details
            .iter()
            .filter(|r| matches!(r.party, Party::Other(_)))
    }
}

/// Compute every term's change and sum them per party.
///
/// Terms with a party other than `D` or `R` appear in `details` but add to
/// neither total.
pub fn aggregate(registry: &TermRegistry, store: &TimeSeriesStore) -> AggregationResult {
    let mut result = AggregationResult::default();

    for term in registry.all_terms() {
        let record = compute_change(term, store);

        match record.party {
            Party::Democratic => result.totals.democratic += record.change,
            Party::Republican => result.totals.republican += record.change,
            Party::Other(_) => {}
        }

        result.details.push(record);
    }

    result
}
