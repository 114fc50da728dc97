/// The document analysis engine.
///
/// Holds the immutable best-practice catalog and a lazily constructed embedding
/// model handle. `analyze` is pure and never fails; `answer_query` needs the
/// model and surfaces `EngineUnavailable` when it cannot be built or invoked.
/// A failed model build is remembered, so later queries fail fast instead of
/// retrying the expensive initialization.
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::classify::classify;
use crate::error::AppError;
use crate::gaps::find_missing;
use crate::model::{AnalysisReport, KnowledgeEntry, RetrievalMatch};
use crate::quality;
use crate::retrieval;
use crate::segment::segment;
use crate::suggest::suggest;

/// Character-count cutoff between document analysis and query retrieval.
/// Overridable through `Config`; the default matches the original system.
pub const DEFAULT_ANALYZE_THRESHOLD: usize = 500;

pub struct DocEngine {
    catalog: Vec<KnowledgeEntry>,
    analyze_threshold: usize,
    embedder: OnceCell<Option<Arc<advisor_common::embedding::Embedder>>>,
    catalog_vectors: OnceCell<Vec<Vec<f32>>>,
}

/// What the dispatching entry point produced for a given input.
pub enum EngineOutput {
    Analysis(AnalysisReport),
    Retrieval(Vec<RetrievalMatch>),
}

impl DocEngine {
    pub fn new(catalog: Vec<KnowledgeEntry>, analyze_threshold: usize) -> Self {
        Self {
            catalog,
            analyze_threshold,
            embedder: OnceCell::new(),
            catalog_vectors: OnceCell::new(),
        }
    }

    /// True when the input is long enough to be treated as a document to
    /// analyze rather than a query to answer.
    pub fn is_document(&self, input: &str) -> bool {
        input.chars().count() > self.analyze_threshold
    }

    /// Analyze a document against the catalog.
    ///
    /// Never fails: empty or heading-less input produces a degenerate but
    /// well-formed report.
    pub fn analyze(&self, document: &str) -> AnalysisReport {
        let sections = segment(document);
        AnalysisReport {
            section_matches: classify(&sections, &self.catalog),
            missing_elements: find_missing(document),
            suggestions: suggest(document),
            quality_score: quality::score(document),
        }
    }

    /// Answer a short query by similarity search over the catalog.
    ///
    /// Fails only with `EngineUnavailable`; there is no internal retry.
    pub async fn answer_query(&self, query: &str) -> Result<Vec<RetrievalMatch>, AppError> {
        let embedder = self.embedder().await?;
        let catalog_vectors = self.catalog_vectors(&embedder).await?;
        let query_vector = embedder
            .embed_query(query)
            .await
            .map_err(|e| AppError::EngineUnavailable(e.to_string()))?;
        Ok(retrieval::rank(&self.catalog, catalog_vectors, &query_vector))
    }

    /// Length-based dispatch between the two modes.
    pub async fn run(&self, input: &str) -> Result<EngineOutput, AppError> {
        if self.is_document(input) {
            Ok(EngineOutput::Analysis(self.analyze(input)))
        } else {
            Ok(EngineOutput::Retrieval(self.answer_query(input).await?))
        }
    }

    /// Embedding model handle, built at most once. A failed build is stored as
    /// `None` so the download/initialization is never retried.
    async fn embedder(
        &self,
    ) -> Result<Arc<advisor_common::embedding::Embedder>, AppError> {
        let slot = self
            .embedder
            .get_or_init(|| async {
                info!("initializing embedding model (may download on first use)");
                match advisor_common::embedding::Embedder::new().await {
                    Ok(embedder) => Some(Arc::new(embedder)),
                    Err(e) => {
                        error!(error = %e, "embedding model initialization failed");
                        None
                    }
                }
            })
            .await;
        slot.clone().ok_or_else(|| {
            AppError::EngineUnavailable("embedding model failed to initialize".to_string())
        })
    }

    /// Catalog content vectors, embedded once per engine instance. Transient
    /// embedding failures propagate without being memoized.
    async fn catalog_vectors(
        &self,
        embedder: &advisor_common::embedding::Embedder,
    ) -> Result<&Vec<Vec<f32>>, AppError> {
        self.catalog_vectors
            .get_or_try_init(|| async {
                let texts: Vec<String> =
                    self.catalog.iter().map(|entry| entry.content.clone()).collect();
                embedder
                    .embed_documents(texts)
                    .await
                    .map_err(|e| AppError::EngineUnavailable(e.to_string()))
            })
            .await
    }
}
