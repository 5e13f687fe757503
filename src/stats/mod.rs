//! Stats module - per-entity growth metrics

mod growth;

pub use growth::{compute_growth, compute_growth_all, DeltaTone, Growth, GrowthMetric, NA_LABEL};
