use crate::forecast::models::ForecastRecord;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Offset of the provider's naive `local_datetime` values (WIB, UTC+7).
pub const LOCAL_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Offset naive provider timestamps are read in.
pub fn local_offset() -> Option<FixedOffset> {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS)
}

/// Parse the timestamp forms the provider uses into an absolute instant.
///
/// Zoned values (RFC 3339) keep their own offset; naive values
/// (`2024-06-01 10:00:00`, bare dates) are read as local station time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    local_offset()?
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Order records by time, ascending, without ever moving a record across
/// one whose timestamp does not parse.
///
/// Unparseable records act as fixed barriers: the records between two
/// barriers are sorted among themselves, stably, so equal timestamps keep
/// their source order.
pub fn sort_by_time(records: &mut [ForecastRecord]) {
    for segment in records.split_mut(|r| r.timestamp().is_none()) {
        segment.sort_by_cached_key(|r| r.timestamp());
    }
}

/// The first `limit` records in time order.
pub fn nowcast(mut records: Vec<ForecastRecord>, limit: usize) -> Vec<ForecastRecord> {
    sort_by_time(&mut records);
    records.truncate(limit);
    records
}
