use crate::classifier::indices::heat_index;
use crate::classifier::Severity;
use serde::Serialize;

/// Current readings from the station sensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Air temperature, °C
    pub temperature: f64,
    /// Relative humidity, %
    pub humidity: f64,
    /// Barometric pressure, hPa
    pub pressure: f64,
    /// Rain rate, mm/h
    pub rain_rate: f64,
}

impl CurrentConditions {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
            rain_rate: 0.0,
        }
    }

    pub fn with_rain_rate(mut self, rain_rate: f64) -> Self {
        self.rain_rate = rain_rate;
        self
    }

    pub fn heat_index(&self) -> f64 {
        heat_index(self.temperature, self.humidity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionIcon {
    CloudLightning,
    ThermometerSun,
    CloudRain,
    Umbrella,
    CloudDrizzle,
    Sun,
    CloudSun,
    Wind,
    CloudFog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    ExtremeStorm,
    HeatstrokeDanger,
    HeavyRain,
    ModerateRain,
    Drizzle,
    DryHeat,
    HumidHeat,
    FairPartlyCloudy,
    Cool,
    Fog,
    NormalTropical,
}

impl ConditionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::ExtremeStorm => "Hujan Badai Ekstrem",
            ConditionKind::HeatstrokeDanger => "Panas Menyengat (Danger)",
            ConditionKind::HeavyRain => "Hujan Lebat",
            ConditionKind::ModerateRain => "Hujan Sedang",
            ConditionKind::Drizzle => "Gerimis / Mendung Tebal",
            ConditionKind::DryHeat => "Panas Terik (Kering)",
            ConditionKind::HumidHeat => "Gerah (Sumuk)",
            ConditionKind::FairPartlyCloudy => "Cerah Berawan",
            ConditionKind::Cool => "Sejuk / Dingin",
            ConditionKind::Fog => "Berkabut",
            ConditionKind::NormalTropical => "Tropis Normal",
        }
    }

    pub fn icon(&self) -> ConditionIcon {
        match self {
            ConditionKind::ExtremeStorm => ConditionIcon::CloudLightning,
            ConditionKind::HeatstrokeDanger | ConditionKind::HumidHeat => {
                ConditionIcon::ThermometerSun
            }
            ConditionKind::HeavyRain => ConditionIcon::CloudRain,
            ConditionKind::ModerateRain => ConditionIcon::Umbrella,
            ConditionKind::Drizzle => ConditionIcon::CloudDrizzle,
            ConditionKind::DryHeat => ConditionIcon::Sun,
            ConditionKind::FairPartlyCloudy | ConditionKind::NormalTropical => {
                ConditionIcon::CloudSun
            }
            ConditionKind::Cool => ConditionIcon::Wind,
            ConditionKind::Fog => ConditionIcon::CloudFog,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ConditionKind::ExtremeStorm => Severity::Critical,
            ConditionKind::HeatstrokeDanger => Severity::Severe,
            ConditionKind::HeavyRain => Severity::High,
            ConditionKind::ModerateRain | ConditionKind::DryHeat | ConditionKind::HumidHeat => {
                Severity::Moderate
            }
            ConditionKind::Drizzle | ConditionKind::Fog => Severity::Mild,
            ConditionKind::FairPartlyCloudy | ConditionKind::Cool | ConditionKind::NormalTropical => {
                Severity::Good
            }
        }
    }

    pub fn description(&self, heat_index: f64) -> String {
        match self {
            ConditionKind::ExtremeStorm => {
                "Waspada! Curah hujan sangat tinggi berpotensi banjir dan angin kencang.".to_string()
            }
            ConditionKind::HeatstrokeDanger => format!(
                "Suhu terasa seperti {:.1}°C. Resiko heatstroke tinggi. Hindari aktivitas luar ruangan.",
                heat_index
            ),
            ConditionKind::HeavyRain => {
                "Hujan deras mengguyur. Jarak pandang mungkin terbatas.".to_string()
            }
            ConditionKind::ModerateRain => {
                "Hujan turun dengan intensitas sedang. Siapkan payung/jas hujan.".to_string()
            }
            ConditionKind::Drizzle => {
                "Cuaca mendung gelap atau gerimis halus. Potensi hujan tinggi.".to_string()
            }
            ConditionKind::DryHeat => {
                "Matahari bersinar sangat terik. Cuaca panas namun tidak terlalu lengket.".to_string()
            }
            ConditionKind::HumidHeat => format!(
                "Udara terasa lengket dan panas (Heat Index: {:.1}°C). Khas cuaca tropis sebelum hujan atau mendung.",
                heat_index
            ),
            ConditionKind::FairPartlyCloudy => {
                "Cuaca bersahabat. Hangat dengan angin sepoi-sepoi.".to_string()
            }
            ConditionKind::Cool => {
                "Udara terasa segar dan sejuk. Nyaman untuk beristirahat.".to_string()
            }
            ConditionKind::Fog => {
                "Kelembapan sangat tinggi menyebabkan kabut. Hati-hati berkendara.".to_string()
            }
            ConditionKind::NormalTropical => {
                "Cuaca tropis biasa. Tidak ada anomali signifikan.".to_string()
            }
        }
    }
}

/// Result of classifying one set of readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCondition {
    pub kind: ConditionKind,
    pub label: &'static str,
    pub description: String,
    pub icon: ConditionIcon,
    pub severity: Severity,
    pub heat_index: f64,
}

impl WeatherCondition {
    fn build(kind: ConditionKind, heat_index: f64) -> Self {
        Self {
            kind,
            label: kind.label(),
            description: kind.description(heat_index),
            icon: kind.icon(),
            severity: kind.severity(),
            heat_index,
        }
    }
}

struct Rule {
    kind: ConditionKind,
    applies: fn(&CurrentConditions) -> bool,
}

/// Decision list; the first rule that applies wins. Later rules overlap
/// earlier ones, so the order here is the classification.
const LADDER: [Rule; 10] = [
    Rule { kind: ConditionKind::ExtremeStorm, applies: is_extreme_storm },
    Rule { kind: ConditionKind::HeatstrokeDanger, applies: is_heatstroke_danger },
    Rule { kind: ConditionKind::HeavyRain, applies: is_heavy_rain },
    Rule { kind: ConditionKind::ModerateRain, applies: is_moderate_rain },
    Rule { kind: ConditionKind::Drizzle, applies: is_drizzle },
    Rule { kind: ConditionKind::DryHeat, applies: is_dry_heat },
    Rule { kind: ConditionKind::HumidHeat, applies: is_humid_heat },
    Rule { kind: ConditionKind::FairPartlyCloudy, applies: is_fair },
    Rule { kind: ConditionKind::Cool, applies: is_cool },
    Rule { kind: ConditionKind::Fog, applies: is_fog },
];

fn is_extreme_storm(c: &CurrentConditions) -> bool {
    c.rain_rate > 20.0 || (c.pressure < 1007.0 && c.humidity > 90.0)
}

fn is_heatstroke_danger(c: &CurrentConditions) -> bool {
    c.heat_index() >= 40.0
}

fn is_heavy_rain(c: &CurrentConditions) -> bool {
    c.rain_rate > 10.0
}

fn is_moderate_rain(c: &CurrentConditions) -> bool {
    c.rain_rate > 0.5
}

fn is_drizzle(c: &CurrentConditions) -> bool {
    c.rain_rate > 0.0 || (c.humidity > 85.0 && c.pressure < 1008.0 && c.temperature < 28.0)
}

fn is_dry_heat(c: &CurrentConditions) -> bool {
    c.temperature >= 32.0 && c.humidity <= 70.0
}

fn is_humid_heat(c: &CurrentConditions) -> bool {
    c.temperature >= 29.0 && c.humidity >= 75.0
}

fn is_fair(c: &CurrentConditions) -> bool {
    (24.0..=32.0).contains(&c.temperature) && c.humidity <= 75.0
}

fn is_cool(c: &CurrentConditions) -> bool {
    c.temperature <= 25.0
}

// Shadowed by the cool rule (<= 25 °C) in `classify`; visible via `matching_rules`.
fn is_fog(c: &CurrentConditions) -> bool {
    c.humidity >= 95.0 && c.temperature <= 22.0
}

/// Which ladder branch the readings fall into.
pub fn classify(conditions: &CurrentConditions) -> ConditionKind {
    LADDER
        .iter()
        .find(|rule| (rule.applies)(conditions))
        .map(|rule| rule.kind)
        .unwrap_or(ConditionKind::NormalTropical)
}

/// Every ladder rule whose predicate holds, in priority order, ignoring
/// precedence. The first element (or the default) is what [`classify`] returns.
pub fn matching_rules(conditions: &CurrentConditions) -> Vec<ConditionKind> {
    LADDER
        .iter()
        .filter(|rule| (rule.applies)(conditions))
        .map(|rule| rule.kind)
        .collect()
}

pub fn interpret(conditions: &CurrentConditions) -> WeatherCondition {
    WeatherCondition::build(classify(conditions), conditions.heat_index())
}

/// Positional form of [`interpret`].
pub fn interpret_weather(
    temperature: f64,
    humidity: f64,
    pressure: f64,
    rain_rate: f64,
) -> WeatherCondition {
    interpret(&CurrentConditions::new(temperature, humidity, pressure).with_rain_rate(rain_rate))
}
