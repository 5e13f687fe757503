//! Long-format table types shared by the whole pipeline.

use std::collections::BTreeSet;

/// One (entity, year) observation produced by the wide-to-long pivot.
///
/// `value` is `None` when the source cell was blank or non-numeric —
/// an absent confirmation, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub entity: String,
    pub year: i32,
    pub value: Option<f64>,
}

/// Ordered collection of [`LongRecord`]s.
///
/// Record order is row-major then year-ascending, which keeps chart
/// rendering stable and makes duplicate lookups deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongTable {
    records: Vec<LongRecord>,
}

impl LongTable {
    pub fn new(records: Vec<LongRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &LongRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record for `(entity, year)` in table order.
    ///
    /// When the source data holds duplicate rows for the same entity the
    /// earliest row wins; callers never see the later duplicates.
    pub fn lookup(&self, entity: &str, year: i32) -> Option<&LongRecord> {
        self.records
            .iter()
            .find(|r| r.entity == entity && r.year == year)
    }

    /// Sorted unique entity names.
    pub fn entities(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.entity.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Smallest and largest year present, if any records exist.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}
