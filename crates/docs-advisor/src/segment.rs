/// Heading-based section segmenter.
///
/// Line-by-line scan: any line whose trimmed form starts with `#` begins a new
/// section. The section name is the heading text with leading markers stripped,
/// trimmed and lower-cased. Prose before the first heading collects under
/// "introduction". Bodies that trim to empty are not flushed. A repeated
/// heading name overwrites the earlier body under the same key (last occurrence
/// wins, first-insertion position kept). A heading that strips to an empty name
/// keeps the current section name, so its body lands under that key through the
/// same overwrite rule.
use indexmap::IndexMap;
use regex::Regex;

const LEADING_SECTION: &str = "introduction";

/// Split a document into an ordered name → body mapping.
///
/// Never fails: input with no headings comes back as a single "introduction"
/// entry, and empty input yields an empty mapping.
pub fn segment(document: &str) -> IndexMap<String, String> {
    let heading_re = Regex::new(r"^#+\s*(.*)$").expect("valid regex");

    let mut sections: IndexMap<String, String> = IndexMap::new();
    let mut current = LEADING_SECTION.to_string();
    let mut body: Vec<&str> = Vec::new();

    for line in document.lines() {
        if let Some(caps) = heading_re.captures(line.trim()) {
            flush(&mut sections, &current, &body);
            body.clear();

            let name = caps[1].trim().to_lowercase();
            if !name.is_empty() {
                current = name;
            }
        } else {
            body.push(line);
        }
    }
    flush(&mut sections, &current, &body);

    sections
}

fn flush(sections: &mut IndexMap<String, String>, name: &str, body: &[&str]) {
    let text = body.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        sections.insert(name.to_string(), text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_in_order() {
        let doc = "# Install\nrun make\n# Usage\ncall it\n# License\nMIT";
        let sections = segment(doc);
        let keys: Vec<&String> = sections.keys().collect();
        assert_eq!(keys, ["install", "usage", "license"]);
        assert_eq!(sections["install"], "run make");
        assert_eq!(sections["usage"], "call it");
        assert_eq!(sections["license"], "MIT");
    }

    #[test]
    fn test_leading_prose_is_introduction() {
        let doc = "Some project.\nDoes things.\n# Install\nrun make";
        let sections = segment(doc);
        assert_eq!(sections[LEADING_SECTION], "Some project.\nDoes things.");
        assert_eq!(sections["install"], "run make");
    }

    #[test]
    fn test_no_headings_yields_single_introduction() {
        let doc = "just a blob of text\nwith no structure";
        let sections = segment(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[LEADING_SECTION], doc);
    }

    #[test]
    fn test_empty_document_yields_no_sections() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_duplicate_heading_last_occurrence_wins() {
        let sections = segment("# A\nfoo\n# A\nbar");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["a"], "bar");
    }

    #[test]
    fn test_heading_name_is_stripped_and_lowercased() {
        let sections = segment("##   Getting Started  \nsteps here");
        assert_eq!(sections.keys().next().unwrap(), "getting started");
    }

    #[test]
    fn test_blank_body_is_not_flushed() {
        let sections = segment("# A\n\n   \n# B\nbody");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["b"], "body");
    }

    #[test]
    fn test_empty_heading_name_keeps_current_section() {
        // The bare "#" strips to nothing; its body replaces the previous one
        // under the current key.
        let sections = segment("# A\nfoo\n#\nbar");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["a"], "bar");
    }

    #[test]
    fn test_body_trimmed_at_flush() {
        let sections = segment("# A\n\nfoo bar\n\n");
        assert_eq!(sections["a"], "foo bar");
    }
}
