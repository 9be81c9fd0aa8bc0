pub mod models;
pub mod normalizer;
pub mod ordering;

pub use models::ForecastRecord;
pub use normalizer::{deep_flatten, NormalizeStats, Normalizer, PayloadShape};
pub use ordering::{nowcast, parse_timestamp, sort_by_time};
