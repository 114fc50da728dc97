/// The built-in documentation best-practice catalog.
///
/// Ten entries covering the areas a well-presented repository documents. The
/// catalog is constructed once at startup and never mutated; keyword lists
/// drive the heuristic classifier, content strings are embedded for retrieval.
use crate::model::KnowledgeEntry;

fn entry(category: &str, content: &str, keywords: &[&str]) -> KnowledgeEntry {
    KnowledgeEntry {
        category: category.to_string(),
        content: content.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

pub fn best_practices() -> Vec<KnowledgeEntry> {
    vec![
        entry(
            "README Structure",
            "A good README should include project title, description, installation \
             instructions, usage examples, API documentation, contributing guidelines, \
             and license information.",
            &["readme", "documentation", "structure", "installation", "usage"],
        ),
        entry(
            "Installation Guide",
            "Installation instructions should be clear, step-by-step, include \
             prerequisites, dependency management, and platform-specific instructions.",
            &["installation", "setup", "dependencies", "requirements", "getting started"],
        ),
        entry(
            "Usage Examples",
            "Usage examples should provide clear, executable code snippets that \
             demonstrate main functionality and common use cases.",
            &["usage", "examples", "tutorial", "quickstart", "demo"],
        ),
        entry(
            "API Documentation",
            "API documentation should include endpoint descriptions, request/response \
             formats, authentication methods, and error handling.",
            &["api", "endpoints", "authentication", "requests", "responses"],
        ),
        entry(
            "Contributing Guidelines",
            "Contributing guidelines should explain how to set up development \
             environment, coding standards, pull request process, and issue reporting.",
            &["contributing", "development", "pull request", "issues", "coding standards"],
        ),
        entry(
            "License and Legal",
            "Projects should include clear license information, copyright notices, and \
             any legal requirements or disclaimers.",
            &["license", "copyright", "legal", "terms", "disclaimer"],
        ),
        entry(
            "Project Metadata",
            "Projects should have relevant tags, topics, description, and keywords that \
             help with discoverability and categorization.",
            &["tags", "topics", "metadata", "keywords", "discoverability"],
        ),
        entry(
            "Testing and Quality",
            "Projects should include information about testing procedures, code quality \
             tools, continuous integration, and build status.",
            &["testing", "quality", "ci", "build", "coverage"],
        ),
        entry(
            "Deployment and Production",
            "Deployment documentation should cover production setup, configuration, \
             environment variables, and scalability considerations.",
            &["deployment", "production", "configuration", "environment", "scaling"],
        ),
        entry(
            "Architecture and Design",
            "Technical projects should explain system architecture, design decisions, \
             technology stack, and data flow.",
            &["architecture", "design", "technology stack", "system", "data flow"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_entries() {
        assert_eq!(best_practices().len(), 10);
    }

    #[test]
    fn test_categories_are_unique() {
        let catalog = best_practices();
        let categories: HashSet<&str> = catalog.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories.len(), catalog.len());
    }

    #[test]
    fn test_entries_are_well_formed() {
        for entry in best_practices() {
            assert!(!entry.category.is_empty());
            assert!(!entry.content.is_empty());
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.category);
            assert!(
                entry.keywords.iter().all(|k| *k == k.to_lowercase()),
                "{} has non-lowercase keywords",
                entry.category
            );
        }
    }
}
