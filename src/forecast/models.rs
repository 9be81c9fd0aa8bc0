use crate::forecast::ordering::{local_offset, parse_timestamp};
use crate::wind::{degrees_to_compass, normalize_degrees};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// One timed forecast sample, flattened out of the provider payload.
///
/// Serializes under the provider's own field names so display code can keep
/// using the short keys (`t`, `hu`, `tcc`...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub datetime: String,
    pub utc_datetime: String,
    pub local_datetime: String,
    pub analysis_date: String,
    pub time_index: String,

    #[serde(rename = "t")]
    pub temperature: f64,
    #[serde(rename = "hu")]
    pub humidity: f64,
    #[serde(rename = "tcc")]
    pub cloud_cover: f64,
    #[serde(rename = "tp")]
    pub precipitation: f64,

    #[serde(rename = "weather")]
    pub weather_code: i64,
    pub weather_desc: String,
    pub weather_desc_en: String,

    #[serde(rename = "ws")]
    pub wind_speed: f64,
    #[serde(rename = "wd_deg")]
    pub wind_direction_deg: f64,
    #[serde(rename = "wd")]
    pub wind_from: String,
    #[serde(rename = "wd_to")]
    pub wind_to: String,

    #[serde(rename = "vs")]
    pub visibility: f64,
    #[serde(rename = "vs_text")]
    pub visibility_text: String,

    pub image: String,
}

impl ForecastRecord {
    /// Map one leaf of the payload. Anything that is not a JSON object is not a record.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from_object)
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            datetime: coerce_string(obj.get("datetime")),
            utc_datetime: coerce_string(obj.get("utc_datetime")),
            local_datetime: coerce_string(obj.get("local_datetime")),
            analysis_date: coerce_string(obj.get("analysis_date")),
            time_index: coerce_string(obj.get("time_index")),
            temperature: coerce_f64(obj.get("t")),
            humidity: coerce_f64(obj.get("hu")),
            cloud_cover: coerce_f64(obj.get("tcc")),
            precipitation: coerce_f64(obj.get("tp")),
            weather_code: coerce_i64(obj.get("weather")),
            weather_desc: coerce_string(obj.get("weather_desc")),
            weather_desc_en: coerce_string(obj.get("weather_desc_en")),
            wind_speed: coerce_f64(obj.get("ws")),
            wind_direction_deg: coerce_f64(obj.get("wd_deg")),
            wind_from: coerce_string(obj.get("wd")),
            wind_to: coerce_string(obj.get("wd_to")),
            visibility: coerce_f64(obj.get("vs")),
            visibility_text: coerce_string(obj.get("vs_text")),
            image: coerce_string(obj.get("image")),
        }
    }

    /// Time key used for ordering: local time when present, else `datetime`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = if self.local_datetime.trim().is_empty() {
            &self.datetime
        } else {
            &self.local_datetime
        };
        parse_timestamp(raw)
    }

    /// `HH:MM` for display, read straight off the provider strings when possible.
    pub fn clock_label(&self) -> Option<String> {
        let from_local = self
            .local_datetime
            .split_once(' ')
            .and_then(|(_, time)| time.get(..5));
        let from_utc = self
            .datetime
            .split_once('T')
            .and_then(|(_, time)| time.get(..5));

        from_local
            .or(from_utc)
            .map(str::to_string)
            .or_else(|| {
                let offset = local_offset()?;
                self.timestamp()
                    .map(|ts| ts.with_timezone(&offset).format("%H:%M").to_string())
            })
    }

    pub fn heading(&self) -> Option<f64> {
        normalize_degrees(self.wind_direction_deg)
    }

    /// Provider's own compass label, or one derived from `wd_deg`.
    pub fn compass_label(&self) -> String {
        let label = self.wind_from.trim();
        if !label.is_empty() {
            return label.to_string();
        }
        degrees_to_compass(self.wind_direction_deg)
            .unwrap_or_default()
            .to_string()
    }
}

fn coerce_f64(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn coerce_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
