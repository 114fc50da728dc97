/// Keyword-overlap classifier matching document sections to catalog entries.
///
/// No embeddings here: the score of a section against an entry is the fraction
/// of the entry's keywords that appear as substrings of the lower-cased body.
use indexmap::IndexMap;

use crate::model::{KnowledgeEntry, QualityLabel, SectionMatch};

/// Sections whose trimmed body is this long or shorter are treated as noise.
const MIN_SECTION_CHARS: usize = 10;
/// A section is reported only when its best score strictly exceeds this.
const MATCH_THRESHOLD: f64 = 0.2;
/// Scores strictly above this earn a "Good" label.
const GOOD_THRESHOLD: f64 = 0.5;

/// Classify sections against the catalog, in section order.
///
/// The best-scoring entry wins; ties keep the first entry in catalog order.
/// Sections that never clear the match threshold are dropped from the output
/// entirely rather than reported as unmatched.
pub fn classify(
    sections: &IndexMap<String, String>,
    catalog: &[KnowledgeEntry],
) -> Vec<SectionMatch> {
    let mut matches = Vec::new();

    for (name, body) in sections {
        if body.trim().chars().count() <= MIN_SECTION_CHARS {
            continue;
        }
        let body_lower = body.to_lowercase();

        let mut best: Option<(&KnowledgeEntry, f64)> = None;
        for entry in catalog {
            if entry.keywords.is_empty() {
                continue;
            }
            let hits = entry
                .keywords
                .iter()
                .filter(|keyword| body_lower.contains(keyword.as_str()))
                .count();
            let score = hits as f64 / entry.keywords.len() as f64;
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((entry, score));
            }
        }

        if let Some((entry, score)) = best {
            if score > MATCH_THRESHOLD {
                matches.push(SectionMatch {
                    section: name.clone(),
                    category: entry.category.clone(),
                    quality: if score > GOOD_THRESHOLD {
                        QualityLabel::Good
                    } else {
                        QualityLabel::NeedsImprovement
                    },
                });
            }
        }
    }

    matches
}
