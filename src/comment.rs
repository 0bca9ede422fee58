//! Documentation-comment blocks for generated declarations.
//!
//! Stateless string-in/string-out formatting: a set of optional tag texts is
//! turned into one leading `/** … */` block, or the declaration is returned
//! unchanged when no tag has text.

/// Reflow free-form documentation text for block-comment continuation.
///
/// Each input line is trimmed, blank lines are dropped, and the remaining
/// lines are rejoined with a `*` continuation marker.
fn transform_comment(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n*\n* ")
}

/// Prepend a documentation block to `decl`, one `@tag` line per present tag.
///
/// Tags whose text is absent or blank contribute nothing; if no tag produced
/// a line, `decl` is returned unchanged.
pub(crate) fn attach_comment(decl: String, tags: &[(&str, Option<&str>)]) -> String {
    let lines: Vec<String> = tags
        .iter()
        .filter_map(|(tag, value)| {
            value.and_then(|text| {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(format!("* @{tag} {}", transform_comment(trimmed)))
                }
            })
        })
        .collect();

    if lines.is_empty() {
        return decl;
    }

    format!("/**\n{}\n*/\n{}", lines.join("\n"), decl)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_comment_no_tags() {
        let decl = attach_comment("a: string".to_string(), &[("remarks", None)]);
        assert_eq!(decl, "a: string");
    }

    #[test]
    fn test_attach_comment_blank_text_is_skipped() {
        let decl = attach_comment("a: string".to_string(), &[("remarks", Some("  \n "))]);
        assert_eq!(decl, "a: string");
    }

    #[test]
    fn test_attach_comment_single_tag() {
        let decl = attach_comment("a: string".to_string(), &[("remarks", Some("the a field"))]);
        assert_eq!(decl, "/**\n* @remarks the a field\n*/\na: string");
    }

    #[test]
    fn test_attach_comment_multiple_tags() {
        let decl = attach_comment(
            "a: string".to_string(),
            &[("remarks", Some("field")), ("deprecated", Some("use b"))],
        );
        assert_eq!(
            decl,
            "/**\n* @remarks field\n* @deprecated use b\n*/\na: string"
        );
    }

    #[test]
    fn test_transform_comment_reflows_lines() {
        let decl = attach_comment(
            "a: string".to_string(),
            &[("remarks", Some("first\n\n  second  "))],
        );
        assert_eq!(decl, "/**\n* @remarks first\n*\n* second\n*/\na: string");
    }
}
