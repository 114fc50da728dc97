use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReviewContentParams {
    /// Documentation content to analyze, or a short question about documentation
    /// best practices. Long input is analyzed as a document; short input is
    /// answered from the best-practice catalog.
    pub input: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeDocumentParams {
    /// The documentation content to analyze (typically a README).
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryBestPracticesParams {
    /// A natural-language question about documentation best practices.
    pub query: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SectionMatchResult {
    /// Lower-cased section heading from the document.
    pub section: String,
    /// Best-matching catalog category.
    pub category: String,
    /// "Good" or "Needs Improvement".
    pub quality: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AnalysisReportResponse {
    pub section_matches: Vec<SectionMatchResult>,
    pub missing_elements: Vec<String>,
    pub suggestions: Vec<String>,
    /// Overall quality score, 0 to 10.
    pub quality_score: u8,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PracticeMatch {
    pub category: String,
    pub guidance: String,
    /// Cosine similarity between the query and the catalog entry.
    pub similarity: f32,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct QueryBestPracticesResponse {
    pub matches: Vec<PracticeMatch>,
}

/// Response of the dispatching `review_content` tool. The `mode` tag records
/// which path the input took.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
// MCP requires outputSchema roots to carry `"type": "object"`; schemars emits a
// bare `oneOf` for internally tagged enums, so state the (accurate) root type.
#[schemars(extend("type" = "object"))]
pub enum ReviewContentResponse {
    Analysis(AnalysisReportResponse),
    Query(QueryBestPracticesResponse),
}
