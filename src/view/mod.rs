//! Filter evaluation.
//!
//! [`derive_view`] is the pure projection from the dataset and the current
//! [`FilterState`] to the rows every display reads. [`ViewCache`] memoizes it
//! so displays can read the view freely on every frame.

mod cache;
mod filter;

pub use cache::ViewCache;
pub use filter::{BillRange, FilterState};

use crate::data::{Dataset, Record};

/// Rows of the dataset that satisfy the current filters, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedView {
    records: Vec<Record>,
}

impl DerivedView {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a DerivedView {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Keep the records matching all three predicates (bill range, time, day).
pub fn derive_view(dataset: &Dataset, state: &FilterState) -> DerivedView {
    let records = dataset
        .records()
        .iter()
        .filter(|record| state.matches(record))
        .cloned()
        .collect();
    DerivedView { records }
}

impl FromIterator<Record> for DerivedView {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
