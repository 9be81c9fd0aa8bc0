use crate::error::{AppError, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub station: StationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    /// BMKG level-4 administrative area code (village), e.g. `33.05.05.2009`
    pub adm4: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct StationConfig {
    #[serde(default)]
    pub name: String,
    /// Barometric pressure used when classifying forecast slots, which carry none
    #[serde(default = "default_pressure")]
    pub pressure_hpa: f64,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            pressure_hpa: default_pressure(),
        }
    }
}

fn default_pressure() -> f64 {
    1010.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    6
}

/// Custom deserializer that handles the limit as both number and string
///
/// Accepts:
/// - `limit: 6` (number)
/// - `limit: "6"` (string that parses to number)
/// - `limit: ${NOWCAST_LIMIT}` (env var substituted to either)
fn deserialize_limit<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LimitValue {
        Number(usize),
        String(String),
    }

    match LimitValue::deserialize(deserializer)? {
        LimitValue::Number(n) => Ok(n),
        LimitValue::String(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid display limit: '{}'", s))),
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text, expanding `${VAR}` references first
    pub fn from_yaml(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&expanded)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.source.base_url).map_err(|e| {
            AppError::Config(format!(
                "Invalid source base_url '{}': {}",
                self.source.base_url, e
            ))
        })?;

        if parsed.scheme() != "https" {
            return Err(AppError::Config(format!(
                "Source base_url must use HTTPS, got: {}",
                parsed.scheme()
            )));
        }

        let adm4_pattern = regex_lite::Regex::new(r"^\d{2}\.\d{2}\.\d{2}\.\d{4}$")
            .map_err(|e| AppError::Config(format!("adm4 pattern error: {}", e)))?;
        if !adm4_pattern.is_match(self.source.adm4.trim()) {
            return Err(AppError::Config(format!(
                "Region code adm4 '{}' must look like 'NN.NN.NN.NNNN' (e.g. '33.05.05.2009')",
                self.source.adm4
            )));
        }

        if self.source.request_timeout_seconds == 0 {
            return Err(AppError::Config(
                "Source request_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.source.max_retries > 10 {
            tracing::warn!(
                "max_retries of {} is high; backoff doubles on every attempt",
                self.source.max_retries
            );
        }

        if !(800.0..=1100.0).contains(&self.station.pressure_hpa) {
            return Err(AppError::Config(format!(
                "Station pressure_hpa {} is outside the plausible range 800-1100",
                self.station.pressure_hpa
            )));
        }

        if self.display.limit == 0 {
            return Err(AppError::Config(
                "Display limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = content.to_string();
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}")
        .map_err(|e| AppError::Config(format!("Env pattern error: {}", e)))?;

    let mut missing_vars = Vec::new();

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(value) => {
                result = result.replace(&cap[0], &value);
            }
            Err(_) => {
                missing_vars.push(var_name.to_string());
            }
        }
    }

    if !missing_vars.is_empty() {
        return Err(AppError::Config(format!(
            "Missing required environment variable{}: {}\n\n\
             To fix this:\n\
             1. Create a .env file in the project root\n\
             2. Set the missing variable{}: export {}=<value>",
            if missing_vars.len() > 1 { "s" } else { "" },
            missing_vars.join(", "),
            if missing_vars.len() > 1 { "s" } else { "" },
            missing_vars[0],
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
source:
  base_url: https://api.bmkg.go.id/publik
  adm4: "33.05.05.2009"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.source.request_timeout_seconds, 30);
        assert_eq!(config.source.max_retries, 3);
        assert_eq!(config.station.pressure_hpa, 1010.0);
        assert_eq!(config.display.limit, 6);
    }

    #[test]
    fn test_limit_deserialize_from_string() {
        let yaml = r#"limit: "12""#;
        let display: DisplayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(display.limit, 12);
    }

    #[test]
    fn test_limit_deserialize_invalid_string() {
        let yaml = r#"limit: "many""#;
        let result: std::result::Result<DisplayConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Invalid display limit") || err_msg.contains("many"));
    }

    #[test]
    fn test_rejects_plain_http() {
        let yaml = r#"
source:
  base_url: http://api.bmkg.go.id/publik
  adm4: "33.05.05.2009"
"#;
        let err = Config::from_yaml(yaml).unwrap_err().to_string();
        assert!(err.contains("must use HTTPS"));
    }

    #[test]
    fn test_rejects_malformed_region_code() {
        let yaml = r#"
source:
  base_url: https://api.bmkg.go.id/publik
  adm4: "33.05"
"#;
        let err = Config::from_yaml(yaml).unwrap_err().to_string();
        assert!(err.contains("adm4"));
    }

    #[test]
    fn test_rejects_implausible_pressure() {
        let yaml = r#"
source:
  base_url: https://api.bmkg.go.id/publik
  adm4: "33.05.05.2009"
station:
  pressure_hpa: 10.0
"#;
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_missing_env_var_is_reported() {
        let yaml = r#"
source:
  base_url: ${STATION_NOWCAST_TEST_SURELY_UNSET_URL}
  adm4: "33.05.05.2009"
"#;
        let err = Config::from_yaml(yaml).unwrap_err().to_string();
        assert!(err.contains("STATION_NOWCAST_TEST_SURELY_UNSET_URL"));
    }
}
