use serde::{Deserialize, Serialize};

/// A best-practice entry in the knowledge base catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Category name, e.g. "Installation Guide"
    pub category: String,
    /// Guidance text; this is what gets embedded for retrieval
    pub content: String,
    /// Keywords driving the heuristic classifier, in catalog order
    pub keywords: Vec<String>,
}

/// Quality label assigned by the classifier to a matched section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            QualityLabel::Good => "Good",
            QualityLabel::NeedsImprovement => "Needs Improvement",
        })
    }
}

/// A document section matched to a catalog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMatch {
    /// Lower-cased section heading
    pub section: String,
    /// Best-matching catalog category
    pub category: String,
    pub quality: QualityLabel,
}

/// Structured result of analyzing a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Matched sections in document order; unmatched sections are absent
    pub section_matches: Vec<SectionMatch>,
    /// Documentation elements with no trigger keyword anywhere in the text
    pub missing_elements: Vec<String>,
    /// Improvement suggestions from structural checks
    pub suggestions: Vec<String>,
    /// Overall quality score, always in 0..=10
    pub quality_score: u8,
}

/// A catalog entry retrieved for a query, with its cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalMatch {
    pub category: String,
    pub content: String,
    pub similarity: f32,
}
