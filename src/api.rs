use std::time::Duration;

use reqwest::StatusCode;
use tokio::time::sleep;

use crate::config::Config;
use crate::error::UpdateError;
use crate::types::{Lottery, UpstreamDraw};

const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Client for the loterias portal API.
///
/// `GET {base}/{endpoint}` returns the latest published draw;
/// `GET {base}/{endpoint}/{concurso}` returns a specific one. Every
/// request is bounded by the configured timeout and transient failures
/// are retried a bounded number of times.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: String,
    retry_attempts: u32,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> Result<Self, UpdateError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
            retry_attempts: config.retry_attempts.max(1),
        })
    }

    /// Latest published draw for a lottery.
    pub async fn fetch_latest(&self, lottery: Lottery) -> Result<UpstreamDraw, UpdateError> {
        let url = format!("{}/{}", self.base, lottery.endpoint());
        self.fetch_json(&url).await
    }

    /// A specific draw by contest number.
    pub async fn fetch_draw(
        &self,
        lottery: Lottery,
        concurso: u32,
    ) -> Result<UpstreamDraw, UpdateError> {
        let url = format!("{}/{}/{}", self.base, lottery.endpoint(), concurso);
        self.fetch_json(&url).await
    }

    async fn fetch_json(&self, url: &str) -> Result<UpstreamDraw, UpdateError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.http.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<UpstreamDraw>()
                            .await
                            .map_err(|e| UpdateError::Parse(format!("{url}: {e}")));
                    }
                    if !retryable_status(status) || attempt >= self.retry_attempts {
                        return Err(UpdateError::Fetch(format!("{url}: HTTP {status}")));
                    }
                    tracing::warn!(url, %status, attempt, "retrying after upstream error");
                }
                Err(e) => {
                    if attempt >= self.retry_attempts {
                        return Err(UpdateError::Fetch(format!("{url}: {e}")));
                    }
                    tracing::warn!(url, error = %e, attempt, "retrying after transport error");
                }
            }
            sleep(RETRY_DELAY).await;
        }
    }
}

fn retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 429 | 500..=599)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        assert!(retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!retryable_status(StatusCode::NOT_FOUND));
        assert!(!retryable_status(StatusCode::FORBIDDEN));
    }
}
