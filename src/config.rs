//! Dashboard Configuration Module
//! Externalized defaults: source file, identifier column, year bounds and
//! the initial entity selection.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    #[serde(default = "default_id_column")]
    pub id_column: String,

    #[serde(default = "default_min_year")]
    pub min_year: i32,

    #[serde(default = "default_max_year")]
    pub max_year: i32,

    /// Entities checked when the dashboard opens.
    #[serde(default = "default_entities")]
    pub default_entities: Vec<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/asp_confirmations.csv")
}

fn default_id_column() -> String {
    "Settlement".to_string()
}

fn default_min_year() -> i32 {
    2017
}

fn default_max_year() -> i32 {
    2025
}

fn default_entities() -> Vec<String> {
    ["Gyermely", "Budakeszi", "Szentendre", "Zsámbék", "Süttő", "Tarján"]
        .map(String::from)
        .to_vec()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            id_column: default_id_column(),
            min_year: default_min_year(),
            max_year: default_max_year(),
            default_entities: default_entities(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("parsing config JSON")
    }

    /// Load the config file if present; a missing or malformed file logs a
    /// warning and falls back to defaults, so startup never fails here.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.is_file() {
            log::warn!(
                "config {} not found, using built-in defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring bad config {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.year_range(), (2017, 2025));
        assert_eq!(config.id_column, "Settlement");
        assert!(config.default_entities.contains(&"Gyermely".to_string()));
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            DashboardConfig::from_json(r#"{"min_year": 2019, "id_column": "Town"}"#).unwrap();
        assert_eq!(config.min_year, 2019);
        assert_eq!(config.max_year, 2025);
        assert_eq!(config.id_column, "Town");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = DashboardConfig::load_or_default(Path::new("no/such/config.json"));
        assert_eq!(config, DashboardConfig::default());
    }
}
