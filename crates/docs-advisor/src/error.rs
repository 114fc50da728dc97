#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    /// The embedding model could not be constructed or invoked. This is the
    /// only failure that escapes the engine; analysis itself never fails.
    #[error("analysis engine unavailable: {0}")]
    EngineUnavailable(String),
}
