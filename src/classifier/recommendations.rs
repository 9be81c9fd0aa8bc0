use crate::classifier::indices::heat_index;
use crate::classifier::ladder::CurrentConditions;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Laundry,
    Exercise,
    HomeComfort,
    Garden,
    Health,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub topic: Topic,
    pub message: &'static str,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

pub const LAUNDRY_DRY: &str = "☀️ Waktu terbaik menjemur pakaian! (Cepat kering)";
pub const LAUNDRY_BRING_IN: &str = "🌧️ Angkat jemuran! Potensi hujan atau udara terlalu lembab.";
pub const EXERCISE_GOOD: &str = "🏃 Cuaca enak buat jogging atau sepedaan.";
pub const EXERCISE_CAUTION: &str = "⚠️ Kalau mau olahraga, kurangi intensitas. Rawan dehidrasi.";
pub const EXERCISE_DANGER: &str = "🚫 Jangan olahraga berat di luar. Bahaya heatstroke!";
pub const HOME_COOLING: &str = "❄️ Nyalakan Kipas/AC agar tidak gerah.";
pub const HOME_WARM_DRINK: &str = "☕ Cocok buat ngopi/ngeteh hangat.";
pub const GARDEN_WATER: &str = "💧 Siram tanaman sore ini, penguapan tinggi.";
pub const GARDEN_DRAINAGE: &str = "🌱 Cek saluran air kebun, waspada genangan.";
pub const HEALTH_MOSQUITO: &str = "🦟 Waspada nyamuk DBD (Suhu lembab & hangat disukai nyamuk).";

/// Activity advice for the readings. Each topic is checked independently, in
/// a fixed order, and contributes at most one message.
pub fn recommend(temperature: f64, humidity: f64, rain_rate: f64) -> Vec<Recommendation> {
    let hi = heat_index(temperature, humidity);
    let dry = rain_rate <= 0.0;
    let t = temperature;
    let h = humidity;

    let checks = [
        (Topic::Laundry, laundry(t, h, dry)),
        (Topic::Exercise, exercise(t, hi, dry)),
        (Topic::HomeComfort, home_comfort(t, hi)),
        (Topic::Garden, garden(t, rain_rate, dry)),
        (Topic::Health, health(t, h)),
    ];

    checks
        .into_iter()
        .filter_map(|(topic, message)| message.map(|message| Recommendation { topic, message }))
        .collect()
}

pub fn recommend_for(conditions: &CurrentConditions) -> Vec<Recommendation> {
    recommend(conditions.temperature, conditions.humidity, conditions.rain_rate)
}

fn laundry(t: f64, h: f64, dry: bool) -> Option<&'static str> {
    if dry && h < 70.0 && t > 28.0 {
        Some(LAUNDRY_DRY)
    } else if !dry || (h > 85.0 && t < 28.0) {
        Some(LAUNDRY_BRING_IN)
    } else {
        None
    }
}

// Anything too warm for the comfortable band gets at least the caution,
// even while the heat index is still below 35.
fn exercise(t: f64, hi: f64, dry: bool) -> Option<&'static str> {
    if hi >= 40.0 {
        Some(EXERCISE_DANGER)
    } else if hi >= 35.0 || t > 30.0 {
        Some(EXERCISE_CAUTION)
    } else if dry && t >= 22.0 {
        Some(EXERCISE_GOOD)
    } else {
        None
    }
}

fn home_comfort(t: f64, hi: f64) -> Option<&'static str> {
    if t > 29.0 || hi > 32.0 {
        Some(HOME_COOLING)
    } else if t < 22.0 {
        Some(HOME_WARM_DRINK)
    } else {
        None
    }
}

fn garden(t: f64, rain_rate: f64, dry: bool) -> Option<&'static str> {
    if dry && t > 30.0 {
        Some(GARDEN_WATER)
    } else if rain_rate > 20.0 {
        Some(GARDEN_DRAINAGE)
    } else {
        None
    }
}

fn health(t: f64, h: f64) -> Option<&'static str> {
    (h > 85.0 && t > 28.0).then_some(HEALTH_MOSQUITO)
}
