//! Small text helpers shared across the emitters.

/// Prefix every line of `text` with `indent` spaces.
pub(crate) fn apply_indent(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape a string for use in a double-quoted JS/TS string literal.
pub(crate) fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
