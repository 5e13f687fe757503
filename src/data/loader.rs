//! CSV Data Loader Module
//! Reads the wide per-settlement confirmation table using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("data file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to parse data file: {0}")]
    Parse(#[from] PolarsError),
}

/// Loads the wide confirmation table with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read a CSV file with a header row into a DataFrame.
    ///
    /// Read-only; the caller owns the returned frame. Malformed input fails
    /// loudly instead of loading as nulls.
    pub fn load_table(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let path_str = path.to_string_lossy().to_string();
        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        Ok(df)
    }
}
