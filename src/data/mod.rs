//! Data module - loading, reshaping, caching and filtering

mod cache;
mod loader;
mod model;
mod reshape;
mod selection;

pub use cache::{PipelineError, TableCache};
pub use loader::{DataLoader, LoaderError};
pub use model::{LongRecord, LongTable};
pub use reshape::{parse_year_header, reshape, ReshapeError};
pub use selection::{filter_range, Filtered, Selection};
