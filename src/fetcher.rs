use crate::error::{AppError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const FORECAST_PATH: &str = "prakiraan-cuaca";

/// HTTP client for the BMKG public forecast API. Returns the raw payload;
/// shaping it is the normalizer's job.
pub struct Fetcher {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl Fetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("station-nowcast/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn forecast_url(&self, adm4: &str) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}/{}", self.base_url, FORECAST_PATH))
            .map_err(|e| AppError::InvalidData(format!("Bad forecast URL: {}", e)))?;
        url.query_pairs_mut().append_pair("adm4", adm4.trim());
        Ok(url)
    }

    pub async fn fetch_forecast(&self, adm4: &str) -> Result<Value> {
        let url = self.forecast_url(adm4)?;
        debug!("Fetching forecast from {}", url);

        let payload = retry_with_backoff(self.max_retries, || async {
            let response = self.client.get(url.clone()).send().await?;
            let response = response.error_for_status()?;
            let body = response.text().await?;
            Ok(serde_json::from_str::<Value>(&body)?)
        })
        .await?;

        info!("Fetched forecast payload for region {}", adm4);
        Ok(payload)
    }
}

/// Retry a future with exponential backoff
async fn retry_with_backoff<F, Fut, T>(max_retries: u32, mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut retries = 0;
    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                retries += 1;

                if retries > max_retries || !is_transient(&e) {
                    return Err(e);
                }

                let delay = Duration::from_secs(2u64.pow(retries.saturating_sub(1)));
                warn!(
                    "Request failed (attempt {}/{}): {}. Retrying in {:?}...",
                    retries, max_retries, e, delay
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Connection problems, timeouts and 5xx are worth another try; bad
/// payloads and client errors are not.
fn is_transient(error: &AppError) -> bool {
    match error {
        AppError::Http(reqwest_err) => {
            reqwest_err.is_timeout()
                || reqwest_err.is_connect()
                || reqwest_err
                    .status()
                    .map(|s| s.is_server_error())
                    .unwrap_or(false)
        }
        _ => false,
    }
}
