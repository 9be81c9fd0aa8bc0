use crate::forecast::models::ForecastRecord;
use serde_json::Value;
use tracing::{debug, warn};

/// Key holding the per-location groups in the provider envelope.
const GROUPS_KEY: &str = "data";
/// Key holding the (day-nested) forecast samples inside a location group.
const FORECAST_KEY: &str = "cuaca";
/// Keys that mark an object as a forecast sample when the payload is already flat.
const SAMPLE_MARKERS: [&str; 2] = ["t", "weather_desc"];

/// The payload layouts the normalizer knows how to read.
#[derive(Debug, Clone, Copy)]
pub enum PayloadShape<'a> {
    /// Already a list of forecast samples; used as-is.
    Flat(&'a [Value]),
    /// `{ "data": [ { "cuaca": [[...], [...]] }, ... ] }` with arbitrary list nesting.
    Grouped(&'a [Value]),
    /// A bare (possibly nested) list of location groups.
    Nested(&'a [Value]),
    Unrecognized,
}

impl<'a> PayloadShape<'a> {
    /// Try the recognized layouts in order: flat, grouped, nested.
    pub fn detect(payload: &'a Value) -> Self {
        match payload {
            Value::Array(items) if items.first().is_some_and(is_forecast_sample) => {
                PayloadShape::Flat(items)
            }
            Value::Array(items) => PayloadShape::Nested(items),
            Value::Object(obj) => match obj.get(GROUPS_KEY) {
                Some(Value::Array(groups)) => PayloadShape::Grouped(groups),
                _ => PayloadShape::Unrecognized,
            },
            _ => PayloadShape::Unrecognized,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PayloadShape::Flat(_) => "flat",
            PayloadShape::Grouped(_) => "grouped",
            PayloadShape::Nested(_) => "nested",
            PayloadShape::Unrecognized => "unrecognized",
        }
    }

    /// Leaf elements in depth-first, left-to-right order. Leaves are not
    /// guaranteed to be objects; mapping decides what to keep.
    pub fn leaves(&self) -> Vec<&'a Value> {
        match *self {
            PayloadShape::Flat(items) => items.iter().collect(),
            PayloadShape::Grouped(groups) => deep_flatten(groups)
                .into_iter()
                .filter_map(forecast_collection)
                .flat_map(deep_flatten)
                .collect(),
            PayloadShape::Nested(items) => deep_flatten(items)
                .into_iter()
                .find_map(forecast_collection)
                .map(deep_flatten)
                .unwrap_or_default(),
            PayloadShape::Unrecognized => Vec::new(),
        }
    }
}

/// Flatten lists nested to any depth into their non-list elements, depth-first.
pub fn deep_flatten(items: &[Value]) -> Vec<&Value> {
    let mut out = Vec::new();
    flatten_into(items, &mut out);
    out
}

fn flatten_into<'a>(items: &'a [Value], out: &mut Vec<&'a Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

fn is_forecast_sample(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| SAMPLE_MARKERS.iter().any(|key| obj.contains_key(*key)))
}

fn forecast_collection(group: &Value) -> Option<&[Value]> {
    group.get(FORECAST_KEY)?.as_array().map(Vec::as_slice)
}

#[derive(Debug, Clone, Default)]
pub struct NormalizeStats {
    pub shape: &'static str,
    pub leaves: usize,
    pub mapped: usize,
    pub dropped: usize,
}

pub struct Normalizer;

impl Normalizer {
    /// Flatten a provider payload into forecast records. Never fails; an
    /// unrecognized payload is simply "no data".
    pub fn normalize(payload: &Value) -> Vec<ForecastRecord> {
        Self::normalize_with_stats(payload).0
    }

    pub fn normalize_with_stats(payload: &Value) -> (Vec<ForecastRecord>, NormalizeStats) {
        let shape = PayloadShape::detect(payload);
        let leaves = shape.leaves();

        let mut stats = NormalizeStats {
            shape: shape.name(),
            leaves: leaves.len(),
            ..Default::default()
        };

        if let PayloadShape::Unrecognized = shape {
            warn!("Forecast payload has no recognizable layout; treating as empty");
            return (Vec::new(), stats);
        }

        let mut records = Vec::with_capacity(leaves.len());
        for (idx, leaf) in leaves.into_iter().enumerate() {
            match ForecastRecord::from_value(leaf) {
                Some(record) => records.push(record),
                None => {
                    stats.dropped += 1;
                    warn!("Dropping non-object forecast element #{}: {}", idx, leaf);
                }
            }
        }
        stats.mapped = records.len();

        debug!(
            "Normalized {} payload: {} leaves, {} records, {} dropped",
            stats.shape, stats.leaves, stats.mapped, stats.dropped
        );

        (records, stats)
    }
}
