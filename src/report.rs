use crate::classifier::{interpret, ComfortBand, ConditionKind, CurrentConditions};
use crate::forecast::ForecastRecord;
use serde::Serialize;
use std::fmt;

/// One line of the nowcast table: a forecast slot plus how it reads to the
/// station classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSummary {
    pub clock: String,
    pub weather: String,
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub wind_speed: f64,
    pub wind_compass: String,
    pub condition: ConditionKind,
    pub condition_label: &'static str,
    pub comfort: ComfortBand,
}

impl SlotSummary {
    /// Forecast slots carry no pressure, so the station's configured pressure
    /// stands in; forecast precipitation is used as the rain rate.
    pub fn from_record(record: &ForecastRecord, pressure_hpa: f64) -> Self {
        let conditions = CurrentConditions::new(record.temperature, record.humidity, pressure_hpa)
            .with_rain_rate(record.precipitation);
        let condition = interpret(&conditions);

        let weather = if record.weather_desc.is_empty() {
            record.weather_desc_en.clone()
        } else {
            record.weather_desc.clone()
        };

        Self {
            clock: record.clock_label().unwrap_or_else(|| "--:--".to_string()),
            weather,
            temperature: record.temperature,
            humidity: record.humidity,
            precipitation: record.precipitation,
            wind_speed: record.wind_speed,
            wind_compass: record.compass_label(),
            condition: condition.kind,
            condition_label: condition.label,
            comfort: ComfortBand::for_conditions(record.temperature, record.humidity),
        }
    }
}

impl fmt::Display for SlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<18} {:>5.1}°C {:>4.0}% {:>5.1} mm  {:>4.1} km/h {:<3}  {} / {}",
            self.clock,
            self.weather,
            self.temperature,
            self.humidity,
            self.precipitation,
            self.wind_speed,
            self.wind_compass,
            self.condition_label,
            self.comfort.level()
        )
    }
}
