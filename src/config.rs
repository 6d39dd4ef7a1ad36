use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://servicebus2.caixa.gov.br/portaldeloterias/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub api_base: String,
    pub request_timeout: Duration,
    pub retry_attempts: u32,
}

pub fn load() -> Result<Config> {
    let data_dir = env::var("LOTERIAS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let api_base =
        env::var("LOTERIAS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    let timeout_secs = env::var("LOTERIAS_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    let retry_attempts = env::var("LOTERIAS_RETRIES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3);

    Ok(Config {
        data_dir: PathBuf::from(data_dir),
        api_base,
        request_timeout: Duration::from_secs(timeout_secs),
        retry_attempts,
    })
}
