//! Charts module - time-series rendering

mod plotter;

pub use plotter::{EntitySeries, SeriesChart, PALETTE};
