/// Heuristic 0-10 quality score for documentation text.
///
/// Five independent, capped signals, summed and clamped at 10:
/// - length: +2 over 1000 chars, +1 over 500
/// - structure: +2 for five or more `#` markers, +1 for three
/// - code: +1 for a fenced block or more than five inline backticks
/// - essential topics: +1 each for install/setup, usage/example,
///   license/copyright
/// - hygiene: +1 when no todo/fixme/hack/temporary markers appear
///
/// All signals are non-negative, so the score is always in 0..=10. Empty input
/// scores exactly 1, from the hygiene signal alone.
pub const MAX_SCORE: u8 = 10;

const HYGIENE_FLAGS: [&str; 4] = ["todo", "fixme", "hack", "temporary"];
const ESSENTIAL_TOPICS: [[&str; 2]; 3] = [
    ["install", "setup"],
    ["usage", "example"],
    ["license", "copyright"],
];

pub fn score(document: &str) -> u8 {
    let text = document.to_lowercase();
    let mut score: u32 = 0;

    let char_count = document.chars().count();
    if char_count > 1000 {
        score += 2;
    } else if char_count > 500 {
        score += 1;
    }

    let heading_markers = document.matches('#').count();
    if heading_markers >= 5 {
        score += 2;
    } else if heading_markers >= 3 {
        score += 1;
    }

    if document.contains("```") || document.matches('`').count() > 5 {
        score += 1;
    }

    for topic in ESSENTIAL_TOPICS {
        if topic.iter().any(|keyword| text.contains(keyword)) {
            score += 1;
        }
    }

    if !HYGIENE_FLAGS.iter().any(|flag| text.contains(flag)) {
        score += 1;
    }

    score.min(u32::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_scores_one() {
        assert_eq!(score(""), 1);
    }

    #[test]
    fn test_hygiene_flags_cost_the_point() {
        assert_eq!(score("TODO: write this"), 0);
        assert_eq!(score("a fixme lives here"), 0);
    }

    #[test]
    fn test_reference_readme_scores_eight() {
        // 1200+ chars, six heading markers, one fenced block, "install" and
        // "license" present, no hygiene flags: 2 + 2 + 1 + 2 + 1.
        let mut doc = String::new();
        doc.push_str("# Overview\nA small library for parsing things.\n");
        doc.push_str("## Install\nGrab the release and install it.\n");
        doc.push_str("## Building\n```\nmake\n```\n");
        doc.push_str("# License\nMIT licensed.\n");
        while doc.chars().count() <= 1000 {
            doc.push_str("More prose about the library internals and design. ");
        }
        assert_eq!(doc.matches('#').count(), 6);
        assert_eq!(score(&doc), 8);
    }

    #[test]
    fn test_score_never_exceeds_max() {
        let mut doc = String::new();
        doc.push_str("# A\n## B\n### C\n#### D\n");
        doc.push_str("```\ncode\n```\n");
        doc.push_str("install setup usage example license copyright\n");
        while doc.chars().count() <= 1000 {
            doc.push_str("padding text goes here ");
        }
        let s = score(&doc);
        assert!(s <= MAX_SCORE, "score {s} out of range");
        assert_eq!(s, 9);
    }

    #[test]
    fn test_length_thresholds() {
        let base = "x".repeat(501);
        assert_eq!(score(&base), 1 + 1);
        let long = "x".repeat(1001);
        assert_eq!(score(&long), 2 + 1);
    }
}
