/// Improvement suggestions from simple structural checks.
///
/// Each rule fires independently and contributes one suggestion; a thorough
/// document produces none. These feed the report's suggestion list and do not
/// affect the quality score.
pub fn suggest(document: &str) -> Vec<String> {
    let text = document.to_lowercase();
    let mut suggestions = Vec::new();

    if document.chars().count() < 500 {
        suggestions
            .push("Expand the documentation with more detailed explanations".to_string());
    }
    if document.matches('#').count() < 3 {
        suggestions.push("Add more section headings to improve document structure".to_string());
    }
    if !document.contains("```") && !document.contains('`') {
        suggestions.push("Include code examples to demonstrate usage".to_string());
    }
    if !text.contains("http") && !text.contains("www") {
        suggestions.push("Add links to related documentation or resources".to_string());
    }
    if !document.contains("![") && !text.contains("image") {
        suggestions.push("Consider adding diagrams, screenshots, or other visual aids".to_string());
    }
    if !text.contains("contact") && !text.contains("email") {
        suggestions.push("Include contact information or support channels".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_fires_every_rule() {
        assert_eq!(suggest("").len(), 6);
    }

    #[test]
    fn test_thorough_document_fires_none() {
        let mut doc = String::new();
        doc.push_str("# One\n## Two\n## Three\n");
        doc.push_str("```\nexample code\n```\n");
        doc.push_str("See https://example.com and the architecture image below.\n");
        doc.push_str("![diagram](docs/diagram.png)\n");
        doc.push_str("Contact us by email.\n");
        while doc.chars().count() < 500 {
            doc.push_str("Plenty of detail about how everything works. ");
        }
        assert!(suggest(&doc).is_empty());
    }

    #[test]
    fn test_inline_code_counts_as_code() {
        let doc = "run `make` to build".to_string() + &" filler".repeat(100);
        let suggestions = suggest(&doc);
        assert!(!suggestions
            .iter()
            .any(|s| s.contains("code examples")));
    }
}
