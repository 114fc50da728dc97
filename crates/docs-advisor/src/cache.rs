/// Redis caching layer for analysis reports and query retrievals.
///
/// All operations return `Option<T>` for graceful degradation. If Redis is
/// unavailable, callers fall through and compute from the engine.
///
/// Key schema (namespaced to avoid collisions):
/// - `dva:v1:analysis:{sha256(document)}` — JSON-serialized AnalysisReport (TTL: 3600s)
/// - `dva:v1:query:{sha256(query)}` — JSON-serialized Vec<RetrievalMatch> (TTL: 3600s)
use sha2::{Digest, Sha256};
use tracing::warn;

use advisor_common::redis::RedisCache;

use crate::model::{AnalysisReport, RetrievalMatch};

const KEY_PREFIX: &str = "dva:v1:";
const CACHE_TTL_SECS: u64 = 3600;

pub struct ReportCache {
    redis: RedisCache,
}

impl ReportCache {
    pub fn new(redis: RedisCache) -> Self {
        Self { redis }
    }

    pub async fn get_report(&self, document: &str) -> Option<AnalysisReport> {
        let key = hashed_key("analysis", document);
        let json = self.redis.get(&key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "cache deserialization failed"))
            .ok()
    }

    pub async fn set_report(&self, document: &str, report: &AnalysisReport) {
        let key = hashed_key("analysis", document);
        if let Ok(json) = serde_json::to_string(report) {
            self.redis.set_with_ttl(&key, &json, CACHE_TTL_SECS).await;
        }
    }

    pub async fn get_retrieval(&self, query: &str) -> Option<Vec<RetrievalMatch>> {
        let key = hashed_key("query", query);
        let json = self.redis.get(&key).await?;
        serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, key, "cache deserialization failed"))
            .ok()
    }

    pub async fn set_retrieval(&self, query: &str, matches: &[RetrievalMatch]) {
        let key = hashed_key("query", query);
        if let Ok(json) = serde_json::to_string(matches) {
            self.redis.set_with_ttl(&key, &json, CACHE_TTL_SECS).await;
        }
    }
}

/// Deterministic cache key from a SHA-256 digest of the text.
fn hashed_key(kind: &str, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let hash = hasher.finalize();
    format!("{KEY_PREFIX}{kind}:{hash:x}")
}
