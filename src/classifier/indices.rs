use crate::classifier::Severity;
use serde::Serialize;

/// Below this air temperature (°C) the heat index is just the temperature.
pub const HEAT_INDEX_MIN_TEMP_C: f64 = 27.0;

// Rothfusz regression, Celsius form. Humidity enters as a percentage (80, not 0.80).
const C1: f64 = -8.784_694_755_56;
const C2: f64 = 1.611_394_11;
const C3: f64 = 2.338_548_838_89;
const C4: f64 = -0.146_116_05;
const C5: f64 = -0.012_308_094;
const C6: f64 = -0.016_424_827_777_8;
const C7: f64 = 0.002_211_732;
const C8: f64 = 0.000_725_46;
const C9: f64 = -0.000_003_582;

/// Apparent temperature (°C) from air temperature (°C) and relative humidity (%).
///
/// The regression was fit for warm, humid air and is not evaluated below
/// [`HEAT_INDEX_MIN_TEMP_C`].
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    if temperature < HEAT_INDEX_MIN_TEMP_C {
        return temperature;
    }

    let t = temperature;
    let rh = humidity;
    C1 + C2 * t
        + C3 * rh
        + C4 * t * rh
        + C5 * t * t
        + C6 * rh * rh
        + C7 * t * t * rh
        + C8 * t * rh * rh
        + C9 * t * t * rh * rh
}

/// Thom's discomfort index, `T - (0.55 - 0.0055 RH)(T - 14.5)`, to one decimal.
pub fn thermal_comfort_index(temperature: f64, humidity: f64) -> f64 {
    let thi = temperature - (0.55 - 0.0055 * humidity) * (temperature - 14.5);
    round_to_tenth(thi)
}

/// Round to one decimal with halves going up, towards positive infinity.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortBand {
    Comfortable,
    NoticeableDiscomfort,
    EvidentDiscomfort,
    IntenseDiscomfort,
    Dangerous,
    HeatStrokeRisk,
}

impl ComfortBand {
    /// Bands are closed on their lower bound: 24.0 is already evident discomfort.
    pub fn from_thi(thi: f64) -> Self {
        match thi {
            x if x < 21.0 => ComfortBand::Comfortable,
            x if x < 24.0 => ComfortBand::NoticeableDiscomfort,
            x if x < 27.0 => ComfortBand::EvidentDiscomfort,
            x if x < 29.0 => ComfortBand::IntenseDiscomfort,
            x if x < 32.0 => ComfortBand::Dangerous,
            _ => ComfortBand::HeatStrokeRisk,
        }
    }

    pub fn for_conditions(temperature: f64, humidity: f64) -> Self {
        Self::from_thi(thermal_comfort_index(temperature, humidity))
    }

    pub fn level(&self) -> &'static str {
        match self {
            ComfortBand::Comfortable => "Comfortable",
            ComfortBand::NoticeableDiscomfort => "Noticeable Discomfort",
            ComfortBand::EvidentDiscomfort => "Evident Discomfort",
            ComfortBand::IntenseDiscomfort => "Intense Discomfort",
            ComfortBand::Dangerous => "Dangerous",
            ComfortBand::HeatStrokeRisk => "Heat Stroke Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComfortBand::Comfortable => "Little to no discomfort",
            ComfortBand::NoticeableDiscomfort => {
                "Some discomfort, especially during physical activity"
            }
            ComfortBand::EvidentDiscomfort => "Evident discomfort; limit intense physical activity",
            ComfortBand::IntenseDiscomfort => "Intense discomfort; avoid exertion",
            ComfortBand::Dangerous => "Dangerous levels of discomfort; avoid outdoor activities",
            ComfortBand::HeatStrokeRisk => "Heat stroke imminent; seek cool environment immediately",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ComfortBand::Comfortable => Severity::Good,
            ComfortBand::NoticeableDiscomfort => Severity::Mild,
            ComfortBand::EvidentDiscomfort => Severity::Moderate,
            ComfortBand::IntenseDiscomfort => Severity::High,
            ComfortBand::Dangerous => Severity::Severe,
            ComfortBand::HeatStrokeRisk => Severity::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_index_not_applied_below_threshold() {
        assert_eq!(heat_index(20.0, 90.0), 20.0);
        assert_eq!(heat_index(26.9, 100.0), 26.9);
        assert_eq!(heat_index(-5.0, 10.0), -5.0);
    }

    #[test]
    fn test_heat_index_regression_values() {
        assert!((heat_index(31.0, 60.0) - 34.846).abs() < 0.01);
        assert!((heat_index(32.0, 70.0) - 40.409).abs() < 0.01);
        assert!((heat_index(30.0, 80.0) - 37.667).abs() < 0.01);
        // At the threshold the polynomial is used, even where it reads cooler than the air.
        assert!((heat_index(27.0, 40.0) - 26.863).abs() < 0.01);
    }

    #[test]
    fn test_thi_rounds_to_one_decimal() {
        assert_eq!(thermal_comfort_index(30.0, 80.0), 28.3);
        assert_eq!(thermal_comfort_index(25.0, 60.0), 22.7);
        assert_eq!(thermal_comfort_index(33.0, 60.0), 28.9);
    }

    #[test]
    fn test_rounding_halves_go_up() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.2);
        assert_eq!(round_to_tenth(-1.35), -1.3);
    }

    #[test]
    fn test_comfort_band_boundaries_belong_to_higher_band() {
        assert_eq!(ComfortBand::from_thi(20.9), ComfortBand::Comfortable);
        assert_eq!(ComfortBand::from_thi(21.0), ComfortBand::NoticeableDiscomfort);
        assert_eq!(ComfortBand::from_thi(24.0), ComfortBand::EvidentDiscomfort);
        assert_eq!(ComfortBand::from_thi(27.0), ComfortBand::IntenseDiscomfort);
        assert_eq!(ComfortBand::from_thi(29.0), ComfortBand::Dangerous);
        assert_eq!(ComfortBand::from_thi(31.9), ComfortBand::Dangerous);
        assert_eq!(ComfortBand::from_thi(32.0), ComfortBand::HeatStrokeRisk);
    }

    #[test]
    fn test_comfort_for_humid_afternoon() {
        let band = ComfortBand::for_conditions(30.0, 80.0);
        assert_eq!(band, ComfortBand::IntenseDiscomfort);
        assert_eq!(band.level(), "Intense Discomfort");
        assert_eq!(band.severity(), Severity::High);
    }
}
