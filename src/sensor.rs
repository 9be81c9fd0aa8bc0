//! Display categories for the live sensor cards.

use serde::Serialize;

/// Readings closer than this are shown as unchanged.
const TREND_EPSILON: f64 = 0.01;

pub fn sunlight_category(lux: f64) -> &'static str {
    match lux {
        x if x < 1_000.0 => "Rendah",
        x if x < 20_000.0 => "Sedang",
        x if x < 50_000.0 => "Tinggi",
        _ => "Sangat Tinggi",
    }
}

/// Share of a 120 klx full-sun reference, clamped to 100.
pub fn sunlight_percentage(lux: f64) -> u8 {
    ((lux / 120_000.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Rainfall over the last hour, mm.
pub fn hourly_rainfall_category(mm: f64) -> &'static str {
    match mm {
        x if x <= 0.0 => "Tidak Ada",
        x if x < 0.5 => "Ringan",
        x if x < 4.0 => "Sedang",
        x if x < 8.0 => "Lebat",
        _ => "Sangat Lebat",
    }
}

/// Rainfall accumulated today, mm.
pub fn daily_rainfall_category(mm: f64) -> &'static str {
    match mm {
        x if x <= 0.0 => "Tidak Hujan",
        x if x <= 20.0 => "Hujan Ringan",
        x if x <= 50.0 => "Hujan Sedang",
        x if x <= 100.0 => "Hujan Lebat",
        _ => "Hujan Sangat Lebat",
    }
}

/// Beaufort-style wind description for a speed in km/h.
pub fn wind_description(kmh: f64) -> &'static str {
    const SCALE: [(f64, &str); 12] = [
        (1.0, "Tenang"),
        (6.0, "Sepoi Ringan"),
        (12.0, "Sepoi Lemah"),
        (20.0, "Sepoi Lembut"),
        (29.0, "Sepoi Sedang"),
        (39.0, "Sepoi Segar"),
        (50.0, "Sepoi Kuat"),
        (62.0, "Angin Kencang"),
        (75.0, "Badai"),
        (89.0, "Badai Kuat"),
        (103.0, "Topan"),
        (118.0, "Topan Kuat"),
    ];

    SCALE
        .iter()
        .find(|(upper, _)| kmh < *upper)
        .map(|(_, name)| *name)
        .unwrap_or("Hurikan")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "direction", content = "delta", rename_all = "snake_case")]
pub enum Trend {
    Steady,
    Up(f64),
    Down(f64),
}

impl Trend {
    /// Change from the previous reading to the current one.
    pub fn between(previous: f64, current: f64) -> Self {
        let diff = current - previous;
        if diff.abs() < TREND_EPSILON {
            Trend::Steady
        } else if diff > 0.0 {
            Trend::Up(diff)
        } else {
            Trend::Down(-diff)
        }
    }

    /// Signed label such as `+0.42°`, `-1.0%` or `0.00` for steady readings.
    pub fn label(&self, unit: &str, decimals: usize) -> String {
        match self {
            Trend::Steady => format!("{:.*}", decimals, 0.0),
            Trend::Up(d) => format!("+{:.*}{}", decimals, d, unit),
            Trend::Down(d) => format!("-{:.*}{}", decimals, d, unit),
        }
    }
}
