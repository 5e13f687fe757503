//! Wide-to-Long Reshaper Module
//! Pivots the one-column-per-year table into (entity, year, value) records.

use polars::prelude::*;
use thiserror::Error;

use super::model::{LongRecord, LongTable};

#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("identifier column '{0}' not found in table")]
    MissingIdColumn(String),
    #[error("year column '{0}' not found in table")]
    MissingYearColumn(String),
    #[error("cannot coerce year column header '{0}' to an integer year")]
    YearCoercion(String),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Coerce a year column header back to the integer year it names.
///
/// Fails loudly so a bad header can never turn into a nonsense year on a
/// record.
pub fn parse_year_header(header: &str) -> Result<i32, ReshapeError> {
    header
        .trim()
        .parse::<i32>()
        .map_err(|_| ReshapeError::YearCoercion(header.to_string()))
}

/// Pivot the wide table into a [`LongTable`].
///
/// Emits exactly one record per (row, year column) cell, row-major then
/// year-ascending. Cells that are blank or fail the numeric cast become
/// `None` values; a year missing from the header row is an error.
pub fn reshape(
    df: &DataFrame,
    id_column: &str,
    year_range: (i32, i32),
) -> Result<LongTable, ReshapeError> {
    let id_series = df
        .column(id_column)
        .map_err(|_| ReshapeError::MissingIdColumn(id_column.to_string()))?;

    let (min_year, max_year) = year_range;

    // Resolve every year column up front so a hole in the range fails
    // before any records are built.
    let mut year_columns: Vec<(i32, Column)> = Vec::new();
    for year in min_year..=max_year {
        let header = year.to_string();
        let column = df
            .column(&header)
            .map_err(|_| ReshapeError::MissingYearColumn(header.clone()))?;
        let year = parse_year_header(&header)?;
        let values = column.cast(&DataType::Float64)?;
        year_columns.push((year, values));
    }

    let mut records = Vec::with_capacity(df.height() * year_columns.len());
    for row in 0..df.height() {
        let entity = match id_series.get(row) {
            Ok(v) if !v.is_null() => v.to_string().trim_matches('"').to_string(),
            _ => String::new(),
        };

        for (year, values) in &year_columns {
            let value = values.f64()?.get(row).filter(|v| !v.is_nan());
            records.push(LongRecord {
                entity: entity.clone(),
                year: *year,
                value,
            });
        }
    }

    Ok(LongTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Settlement".into(), vec!["Gyermely", "Budakeszi"]),
            Column::new("2017".into(), vec![Some(2.0), None]),
            Column::new("2018".into(), vec![Some(3.0), Some(5.0)]),
            Column::new("2019".into(), vec![Some(6.0), Some(7.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn produces_one_record_per_cell() {
        let table = reshape(&wide_frame(), "Settlement", (2017, 2019)).unwrap();
        // 2 rows x 3 year columns
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn order_is_row_major_then_year_ascending() {
        let table = reshape(&wide_frame(), "Settlement", (2017, 2019)).unwrap();
        let seen: Vec<(String, i32)> = table
            .iter()
            .map(|r| (r.entity.clone(), r.year))
            .collect();

        assert_eq!(
            seen,
            vec![
                ("Gyermely".to_string(), 2017),
                ("Gyermely".to_string(), 2018),
                ("Gyermely".to_string(), 2019),
                ("Budakeszi".to_string(), 2017),
                ("Budakeszi".to_string(), 2018),
                ("Budakeszi".to_string(), 2019),
            ]
        );
    }

    #[test]
    fn blank_and_non_numeric_cells_become_missing() {
        let df = DataFrame::new(vec![
            Column::new("Settlement".into(), vec!["Gyermely", "Budakeszi"]),
            Column::new("2017".into(), vec![Some("4"), None]),
            Column::new("2018".into(), vec![Some("pending"), Some("8")]),
        ])
        .unwrap();

        let table = reshape(&df, "Settlement", (2017, 2018)).unwrap();
        assert_eq!(table.lookup("Gyermely", 2017).unwrap().value, Some(4.0));
        assert_eq!(table.lookup("Gyermely", 2018).unwrap().value, None);
        assert_eq!(table.lookup("Budakeszi", 2017).unwrap().value, None);
        assert_eq!(table.lookup("Budakeszi", 2018).unwrap().value, Some(8.0));
    }

    #[test]
    fn missing_id_column_fails() {
        let err = reshape(&wide_frame(), "Town", (2017, 2019)).unwrap_err();
        assert!(matches!(err, ReshapeError::MissingIdColumn(_)));
    }

    #[test]
    fn missing_year_column_fails() {
        let err = reshape(&wide_frame(), "Settlement", (2017, 2020)).unwrap_err();
        assert!(matches!(err, ReshapeError::MissingYearColumn(ref c) if c == "2020"));
    }

    #[test]
    fn bad_year_header_fails_coercion() {
        let err = parse_year_header("not-a-year").unwrap_err();
        assert!(matches!(err, ReshapeError::YearCoercion(_)));
        assert_eq!(parse_year_header(" 2024 ").unwrap(), 2024);
    }

    #[test]
    fn round_trip_preserves_cell_values() {
        let df = wide_frame();
        let table = reshape(&df, "Settlement", (2017, 2019)).unwrap();

        // Re-pivot by (entity, year) and compare against the source cells.
        for (row, entity) in ["Gyermely", "Budakeszi"].iter().enumerate() {
            for year in 2017..=2019 {
                let cell = df
                    .column(&year.to_string())
                    .unwrap()
                    .cast(&DataType::Float64)
                    .unwrap()
                    .f64()
                    .unwrap()
                    .get(row);
                assert_eq!(table.lookup(entity, year).unwrap().value, cell);
            }
        }
    }
}
