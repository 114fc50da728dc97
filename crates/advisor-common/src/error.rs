/// Error types shared across advisor crates.
///
/// Redis failures never surface as errors — the cache wrapper degrades to
/// no-ops — so the embedding model is the only infrastructure piece that can
/// fail callers. Application-specific errors live in the server crate.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("embedding error: {0}")]
    Embedding(String),
}
