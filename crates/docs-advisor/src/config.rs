use crate::engine::DEFAULT_ANALYZE_THRESHOLD;
use crate::error::AppError;

/// Runtime configuration loaded explicitly from environment variables.
///
/// Everything is optional; the server runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379"). `None` disables caching.
    pub redis_url: Option<String>,
    /// Character-count cutoff separating documents (analyzed) from queries (retrieved).
    pub analyze_threshold: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `REDIS_URL`: Redis connection string (omit to disable caching)
    /// - `ANALYZE_THRESHOLD`: dispatch cutoff in characters (default 500)
    pub fn from_env() -> Result<Self, AppError> {
        let redis_url = std::env::var("REDIS_URL").ok();

        let analyze_threshold = match std::env::var("ANALYZE_THRESHOLD") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Config(format!("invalid ANALYZE_THRESHOLD: {raw}"))
            })?,
            Err(_) => DEFAULT_ANALYZE_THRESHOLD,
        };

        Ok(Self {
            redis_url,
            analyze_threshold,
        })
    }
}
