use thiserror::Error;

/// Failure modes of a single lottery's update pass.
///
/// Errors are isolated per lottery type: one lottery failing never stops
/// the others from running to completion.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Upstream unreachable, timed out, or answered with a non-success
    /// status after retries were exhausted.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Upstream payload or stored file cannot be mapped to the draw
    /// record schema.
    #[error("parse failed: {0}")]
    Parse(String),

    /// Appending would break the ascending / unique / gap-free contract
    /// on `concurso`. The dataset is left untouched.
    #[error("consistency violation: {0}")]
    Consistency(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        UpdateError::Fetch(err.to_string())
    }
}
