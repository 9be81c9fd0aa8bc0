//! Wind direction helpers shared by the forecast records and the live sensor cards.

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 22.5;

/// Wrap a bearing into `[0, 360)`. Non-finite input has no bearing.
pub fn normalize_degrees(deg: f64) -> Option<f64> {
    if !deg.is_finite() {
        return None;
    }
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    Some(if wrapped >= 360.0 { 0.0 } else { wrapped })
}

/// 16-point compass label for a bearing, rounding to the nearest sector.
pub fn degrees_to_compass(deg: f64) -> Option<&'static str> {
    let d = normalize_degrees(deg)?;
    let idx = (d / SECTOR_DEGREES).round() as usize % COMPASS_POINTS.len();
    Some(COMPASS_POINTS[idx])
}

/// Bearing of a compass label such as `"SSW"`; case and surrounding whitespace are ignored.
pub fn compass_to_degrees(label: &str) -> Option<f64> {
    let key = label.trim().to_ascii_uppercase();
    COMPASS_POINTS
        .iter()
        .position(|p| *p == key)
        .map(|i| i as f64 * SECTOR_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_negative_and_large() {
        assert_eq!(normalize_degrees(-90.0), Some(270.0));
        assert_eq!(normalize_degrees(720.0), Some(0.0));
        assert_eq!(normalize_degrees(45.0), Some(45.0));
        assert_eq!(normalize_degrees(-1e-20), Some(0.0));
        assert_eq!(degrees_to_compass(-1e-20), Some("N"));
        assert_eq!(normalize_degrees(f64::NAN), None);
        assert_eq!(normalize_degrees(f64::INFINITY), None);
    }

    #[test]
    fn test_degrees_to_compass_rounds_to_nearest_sector() {
        assert_eq!(degrees_to_compass(0.0), Some("N"));
        assert_eq!(degrees_to_compass(11.0), Some("N"));
        assert_eq!(degrees_to_compass(12.0), Some("NNE"));
        assert_eq!(degrees_to_compass(225.0), Some("SW"));
        assert_eq!(degrees_to_compass(350.0), Some("N"));
        assert_eq!(degrees_to_compass(-45.0), Some("NW"));
    }

    #[test]
    fn test_compass_to_degrees() {
        assert_eq!(compass_to_degrees("E"), Some(90.0));
        assert_eq!(compass_to_degrees(" ssw "), Some(202.5));
        assert_eq!(compass_to_degrees("NNW"), Some(337.5));
        assert_eq!(compass_to_degrees("VAR"), None);
        assert_eq!(compass_to_degrees(""), None);
    }
}
