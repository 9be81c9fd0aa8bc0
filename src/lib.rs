//! Station nowcast: reshape BMKG forecast payloads into flat, time-ordered
//! records and interpret current station readings.

pub mod classifier;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod forecast;
pub mod report;
pub mod sensor;
pub mod wind;

pub use classifier::{interpret, recommend, ComfortBand, CurrentConditions, WeatherCondition};
pub use error::{AppError, Result};
pub use forecast::{nowcast, ForecastRecord, Normalizer};
