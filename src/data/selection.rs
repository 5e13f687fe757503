//! Selection Filter Module
//! Restricts the long table to a year window and an entity subset.

use std::collections::BTreeSet;

use super::model::LongTable;

/// User-chosen year window (inclusive) and entity subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub year_range: (i32, i32),
    pub entities: BTreeSet<String>,
}

impl Selection {
    pub fn new(year_range: (i32, i32), entities: impl IntoIterator<Item = String>) -> Self {
        Self {
            year_range,
            entities: entities.into_iter().collect(),
        }
    }

    pub fn contains(&self, entity: &str, year: i32) -> bool {
        let (from, to) = self.year_range;
        from <= year && year <= to && self.entities.contains(entity)
    }
}

/// Result of [`filter_range`]: the visible records plus a flag for the
/// nothing-selected state, which is valid but worth surfacing in the UI.
#[derive(Debug, Clone)]
pub struct Filtered {
    pub table: LongTable,
    pub degenerate_selection: bool,
}

/// Keep the records whose entity is selected and whose year falls inside
/// the inclusive range. An empty entity set yields an empty table with
/// `degenerate_selection` set; it is a warning, never an error.
pub fn filter_range(table: &LongTable, selection: &Selection) -> Filtered {
    if selection.entities.is_empty() {
        log::warn!("empty entity selection, nothing to display");
        return Filtered {
            table: LongTable::default(),
            degenerate_selection: true,
        };
    }

    let records = table
        .iter()
        .filter(|r| selection.contains(&r.entity, r.year))
        .cloned()
        .collect();

    Filtered {
        table: LongTable::new(records),
        degenerate_selection: false,
    }
}
