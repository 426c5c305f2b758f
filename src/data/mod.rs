//! The static tip dataset.
//!
//! Records are loaded once at startup and never mutated afterwards; every
//! other component reads them through a shared [`Dataset`].

mod loader;
mod record;

pub use loader::DataError;
pub use record::{Day, MealTime, Record, Sex};

use crate::view::BillRange;

/// Immutable table of tip records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    bill_bounds: BillRange,
}

impl Dataset {
    /// Build a dataset from already validated records.
    ///
    /// Returns `DataError::Empty` when `records` is empty, since the bill
    /// range of an empty table is undefined.
    pub fn new(records: Vec<Record>) -> Result<Self, DataError> {
        let mut bills = records.iter().map(|r| r.total_bill);
        let first = bills.next().ok_or(DataError::Empty)?;
        let (min, max) = bills.fold((first, first), |(lo, hi), bill| (lo.min(bill), hi.max(bill)));
        Ok(Self {
            records,
            bill_bounds: BillRange::new(min, max),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest bill in the table.
    pub fn bill_bounds(&self) -> BillRange {
        self.bill_bounds
    }
}
