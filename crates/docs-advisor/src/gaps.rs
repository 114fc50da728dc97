/// Missing-element detector.
///
/// Works on the raw lower-cased text, independent of segmentation. An element
/// is missing iff none of its trigger keywords appear anywhere. Matching is by
/// substring, not word boundary: "contribut" covers both "contributing" and
/// "contributors".
const ELEMENT_CHECKS: &[(&str, &[&str])] = &[
    ("Installation instructions", &["install", "setup", "getting started"]),
    ("Usage examples", &["usage", "example", "quickstart", "tutorial"]),
    ("API documentation", &["api", "endpoint", "method", "function"]),
    ("Contributing guidelines", &["contribut", "develop", "pull request"]),
    ("License information", &["license", "copyright", "legal"]),
    ("Testing information", &["test", "testing", "coverage", "ci"]),
    ("Configuration details", &["config", "environment", "settings"]),
    ("Deployment instructions", &["deploy", "production", "server"]),
];

/// Names of documentation elements absent from the text, in check order.
pub fn find_missing(document: &str) -> Vec<String> {
    let text = document.to_lowercase();
    ELEMENT_CHECKS
        .iter()
        .filter(|(_, keywords)| !keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_misses_everything() {
        let missing = find_missing("");
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], "Installation instructions");
        assert_eq!(missing[7], "Deployment instructions");
    }

    #[test]
    fn test_full_coverage_misses_nothing() {
        let doc = "install it, see the usage, api reference, how to contribute, \
                   license: MIT, run the tests, config options, deploy to prod";
        assert!(find_missing(doc).is_empty());
    }

    #[test]
    fn test_substring_matching() {
        // "contributors" contains "contribut"; no word-boundary rules apply.
        let doc = "Thanks to all contributors!";
        let missing = find_missing(doc);
        assert!(!missing.contains(&"Contributing guidelines".to_string()));
    }

    #[test]
    fn test_partial_coverage() {
        let missing = find_missing("Run `make install` and check the LICENSE file.");
        assert!(!missing.contains(&"Installation instructions".to_string()));
        assert!(!missing.contains(&"License information".to_string()));
        assert!(missing.contains(&"Usage examples".to_string()));
        assert!(missing.contains(&"Deployment instructions".to_string()));
    }
}
