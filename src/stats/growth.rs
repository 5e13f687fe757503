//! Growth Metric Module
//! Boundary-year values and the derived growth ratio per entity.

use std::collections::BTreeSet;

use crate::data::LongTable;

/// Label shown when a ratio cannot be computed.
pub const NA_LABEL: &str = "n/a";

/// Presentation tone for the growth delta; neutral means "no indicator".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTone {
    Normal,
    Neutral,
}

/// Growth between two boundary years: a finite multiplier, or the "n/a"
/// sentinel when the baseline is absent, missing or zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Growth {
    Ratio(f64),
    NotAvailable,
}

impl Growth {
    /// Multiplier label, e.g. `3.00x`.
    pub fn label(&self) -> String {
        match self {
            Growth::Ratio(ratio) => format!("{ratio:.2}x"),
            Growth::NotAvailable => NA_LABEL.to_string(),
        }
    }

    pub fn tone(&self) -> DeltaTone {
        match self {
            Growth::Ratio(_) => DeltaTone::Normal,
            Growth::NotAvailable => DeltaTone::Neutral,
        }
    }
}

/// Growth figures for one entity over the selected year window.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthMetric {
    pub entity: String,
    pub start_value: Option<f64>,
    pub end_value: Option<f64>,
    pub growth: Growth,
}

/// Compute the growth metric for one entity between two years.
///
/// Looks up the first record in table order for each boundary year, so
/// duplicate source rows resolve deterministically. A missing record, a
/// missing value or a zero baseline degrades to [`Growth::NotAvailable`];
/// the division is guarded and never panics or emits inf/NaN.
pub fn compute_growth(
    table: &LongTable,
    entity: &str,
    from_year: i32,
    to_year: i32,
) -> GrowthMetric {
    let start_value = table.lookup(entity, from_year).and_then(|r| r.value);
    let end_value = table.lookup(entity, to_year).and_then(|r| r.value);

    let growth = match (start_value, end_value) {
        (Some(start), Some(end)) if start != 0.0 && start.is_finite() && end.is_finite() => {
            Growth::Ratio(end / start)
        }
        _ => Growth::NotAvailable,
    };

    GrowthMetric {
        entity: entity.to_string(),
        start_value,
        end_value,
        growth,
    }
}

/// Growth metrics for every selected entity, in sorted entity order.
pub fn compute_growth_all(
    table: &LongTable,
    entities: &BTreeSet<String>,
    from_year: i32,
    to_year: i32,
) -> Vec<GrowthMetric> {
    entities
        .iter()
        .map(|entity| compute_growth(table, entity, from_year, to_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LongRecord;

    fn record(entity: &str, year: i32, value: Option<f64>) -> LongRecord {
        LongRecord {
            entity: entity.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn ratio_is_formatted_as_multiplier() {
        let table = LongTable::new(vec![
            record("A", 2017, Some(2.0)),
            record("A", 2020, Some(6.0)),
        ]);

        let metric = compute_growth(&table, "A", 2017, 2020);
        assert_eq!(metric.growth, Growth::Ratio(3.0));
        assert_eq!(metric.growth.label(), "3.00x");
        assert_eq!(metric.growth.tone(), DeltaTone::Normal);
    }

    #[test]
    fn absent_from_year_record_degrades_to_sentinel() {
        let table = LongTable::new(vec![record("C", 2020, Some(4.0))]);

        let metric = compute_growth(&table, "C", 2017, 2020);
        assert_eq!(metric.growth, Growth::NotAvailable);
        assert_eq!(metric.growth.label(), NA_LABEL);
        assert_eq!(metric.growth.tone(), DeltaTone::Neutral);
    }

    #[test]
    fn missing_baseline_value_degrades_to_sentinel() {
        let table = LongTable::new(vec![
            record("A", 2017, None),
            record("A", 2020, Some(6.0)),
        ]);

        assert_eq!(
            compute_growth(&table, "A", 2017, 2020).growth,
            Growth::NotAvailable
        );
    }

    #[test]
    fn zero_baseline_never_divides() {
        let table = LongTable::new(vec![
            record("A", 2017, Some(0.0)),
            record("A", 2020, Some(6.0)),
        ]);

        assert_eq!(
            compute_growth(&table, "A", 2017, 2020).growth,
            Growth::NotAvailable
        );
    }

    #[test]
    fn duplicate_rows_use_first_occurrence() {
        let table = LongTable::new(vec![
            record("A", 2017, Some(2.0)),
            record("A", 2017, Some(100.0)),
            record("A", 2020, Some(6.0)),
        ]);

        let metric = compute_growth(&table, "A", 2017, 2020);
        assert_eq!(metric.start_value, Some(2.0));
        assert_eq!(metric.growth, Growth::Ratio(3.0));
    }

    #[test]
    fn all_metrics_follow_sorted_entity_order() {
        let table = LongTable::new(vec![
            record("B", 2017, Some(1.0)),
            record("B", 2020, Some(2.0)),
            record("A", 2017, Some(2.0)),
            record("A", 2020, Some(6.0)),
        ]);

        let entities: BTreeSet<String> = ["B", "A"].iter().map(|s| s.to_string()).collect();
        let metrics = compute_growth_all(&table, &entities, 2017, 2020);

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].entity, "A");
        assert_eq!(metrics[1].entity, "B");
        assert_eq!(metrics[1].growth, Growth::Ratio(2.0));
    }
}
