//! Rule-based interpretation of current station readings: heat index,
//! thermal comfort, a single weather condition, and activity advice.

pub mod indices;
pub mod ladder;
pub mod recommendations;

use serde::Serialize;

pub use indices::{heat_index, thermal_comfort_index, ComfortBand};
pub use ladder::{
    classify, interpret, interpret_weather, matching_rules, ConditionIcon, ConditionKind,
    CurrentConditions, WeatherCondition,
};
pub use recommendations::{recommend, recommend_for, Recommendation, Topic};

/// Display tone shared by conditions and comfort bands, mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Good,
    Mild,
    Moderate,
    High,
    Severe,
    Critical,
}
