/// MCP server exposing the documentation analysis engine.
///
/// Three tools:
/// - `review_content`: length-based dispatch between analysis and retrieval
/// - `analyze_document`: full structural analysis of documentation content
/// - `query_best_practices`: semantic search over the best-practice catalog
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use crate::cache::ReportCache;
use crate::engine::DocEngine;
use crate::error::AppError;
use crate::model::{AnalysisReport, RetrievalMatch};
use advisor_common::api::{
    AnalysisReportResponse, AnalyzeDocumentParams, PracticeMatch, QueryBestPracticesParams,
    QueryBestPracticesResponse, ReviewContentParams, ReviewContentResponse, SectionMatchResult,
};

#[derive(Clone)]
pub struct DocsAdvisorServer {
    engine: Arc<DocEngine>,
    cache: Arc<ReportCache>,
    tool_router: ToolRouter<DocsAdvisorServer>,
}

impl DocsAdvisorServer {
    pub fn new(engine: Arc<DocEngine>, cache: Arc<ReportCache>) -> Self {
        Self {
            engine,
            cache,
            tool_router: Self::tool_router(),
        }
    }

    /// Analyze with a cache in front. Analysis is infallible, so this is too.
    async fn analysis_report(&self, content: &str) -> AnalysisReport {
        if let Some(cached) = self.cache.get_report(content).await {
            info!("analysis cache hit");
            return cached;
        }
        let report = self.engine.analyze(content);
        self.cache.set_report(content, &report).await;
        report
    }

    async fn retrieval_matches(&self, query: &str) -> Result<Vec<RetrievalMatch>, AppError> {
        if let Some(cached) = self.cache.get_retrieval(query).await {
            info!(query, "query cache hit");
            return Ok(cached);
        }
        let matches = self.engine.answer_query(query).await?;
        self.cache.set_retrieval(query, &matches).await;
        Ok(matches)
    }
}

#[tool_router]
impl DocsAdvisorServer {
    #[tool(description = "Review repository documentation or ask about documentation best practices. Input longer than the configured threshold is analyzed as a document (section matches, missing elements, suggestions, quality score); shorter input is answered by semantic retrieval from the best-practice catalog.")]
    async fn review_content(
        &self,
        Parameters(params): Parameters<ReviewContentParams>,
    ) -> Result<Json<ReviewContentResponse>, String> {
        if params.input.trim().is_empty() {
            return Err("input must not be empty".to_string());
        }

        if self.engine.is_document(&params.input) {
            let report = self.analysis_report(&params.input).await;
            Ok(Json(ReviewContentResponse::Analysis(to_report_response(
                &report,
            ))))
        } else {
            let matches = self
                .retrieval_matches(&params.input)
                .await
                .map_err(|e| format!("query failed: {e}"))?;
            Ok(Json(ReviewContentResponse::Query(to_query_response(
                &matches,
            ))))
        }
    }

    #[tool(description = "Analyze documentation content (typically a README): matches sections to best-practice categories, lists missing documentation elements, suggests improvements, and scores overall quality from 0 to 10.")]
    async fn analyze_document(
        &self,
        Parameters(params): Parameters<AnalyzeDocumentParams>,
    ) -> Result<Json<AnalysisReportResponse>, String> {
        if params.content.trim().is_empty() {
            return Err("content must not be empty".to_string());
        }

        let report = self.analysis_report(&params.content).await;
        Ok(Json(to_report_response(&report)))
    }

    #[tool(description = "Answer a question about documentation best practices by semantic similarity search over the built-in catalog. Returns up to three relevant entries with their similarity scores.")]
    async fn query_best_practices(
        &self,
        Parameters(params): Parameters<QueryBestPracticesParams>,
    ) -> Result<Json<QueryBestPracticesResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        let matches = self
            .retrieval_matches(&query)
            .await
            .map_err(|e| format!("query failed: {e}"))?;
        Ok(Json(to_query_response(&matches)))
    }
}

fn to_report_response(report: &AnalysisReport) -> AnalysisReportResponse {
    AnalysisReportResponse {
        section_matches: report
            .section_matches
            .iter()
            .map(|m| SectionMatchResult {
                section: m.section.clone(),
                category: m.category.clone(),
                quality: m.quality.to_string(),
            })
            .collect(),
        missing_elements: report.missing_elements.clone(),
        suggestions: report.suggestions.clone(),
        quality_score: report.quality_score,
    }
}

fn to_query_response(matches: &[RetrievalMatch]) -> QueryBestPracticesResponse {
    QueryBestPracticesResponse {
        matches: matches
            .iter()
            .map(|m| PracticeMatch {
                category: m.category.clone(),
                guidance: m.content.clone(),
                similarity: m.similarity,
            })
            .collect(),
    }
}

#[tool_handler]
impl ServerHandler for DocsAdvisorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "docs-advisor".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Documentation analysis MCP server. Use analyze_document for a \
                 structural report on README-style content (section matches, missing \
                 elements, suggestions, 0-10 quality score), query_best_practices for \
                 semantic search over the built-in best-practice catalog, and \
                 review_content to let input length pick the mode."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DocsAdvisorServer;

    #[test]
    fn tools_publish_output_schemas() {
        let tools = DocsAdvisorServer::tool_router().list_all();
        for name in ["review_content", "analyze_document", "query_best_practices"] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }
}
