//! JSDoc comment text extraction
//!
//! A documentation comment is a block comment opened with `/**`. Its
//! description is everything before the first block tag line (`@param`,
//! `@returns`, ...), with the `*` gutter stripped from each line.

/// Whether `text` is a `/** ... */` comment. The empty `/**/` is not.
pub fn is_doc_comment(text: &str) -> bool {
    text.len() >= 5 && text.starts_with("/**") && text.ends_with("*/")
}

/// Description text of a documentation comment.
///
/// Returns `None` for anything that is not a doc comment, and for doc
/// comments whose description is empty.
pub fn description(text: &str) -> Option<String> {
    if !is_doc_comment(text) {
        return None;
    }
    let body = &text[3..text.len() - 2];

    let mut lines = Vec::new();
    for line in body.lines() {
        let line = strip_gutter(line);
        if line.trim_start().starts_with('@') {
            break;
        }
        lines.push(line.trim_end());
    }

    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Remove leading whitespace, one `*`, and one space after it
fn strip_gutter(line: &str) -> &str {
    let line = line.trim_start();
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(description("/** hello */").as_deref(), Some("hello"));
    }

    #[test]
    fn test_multi_line_gutter() {
        let text = "/**\n * First line.\n *   indented\n * Last.\n */";
        assert_eq!(description(text).as_deref(), Some("First line.\n  indented\nLast."));
    }

    #[test]
    fn test_stops_at_block_tags() {
        let text = "/**\n * Adds numbers.\n * @param a first\n * @returns sum\n */";
        assert_eq!(description(text).as_deref(), Some("Adds numbers."));
    }

    #[test]
    fn test_tags_only_has_no_description() {
        assert_eq!(description("/** @internal */"), None);
        assert_eq!(description("/**\n * @deprecated\n */"), None);
    }

    #[test]
    fn test_not_doc_comments() {
        assert_eq!(description("/* plain */"), None);
        assert_eq!(description("// line"), None);
        assert_eq!(description("/**/"), None);
        assert_eq!(description("/** */"), None);
    }

    #[test]
    fn test_is_doc_comment() {
        assert!(is_doc_comment("/** x */"));
        assert!(!is_doc_comment("/**/"));
        assert!(!is_doc_comment("/* x */"));
    }
}
