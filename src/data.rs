//! Chart data: the series pair, the HTTP source and the one-shot loader

pub mod loader;
pub mod series;
pub mod source;

pub use loader::DataLoader;
pub use series::SeriesPair;
pub use source::{ChartSource, DEFAULT_SOURCE_URL, FetchError, interpret_body};
