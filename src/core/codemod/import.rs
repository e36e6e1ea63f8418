//! Button import injection.

/// Weak presence check: a literal substring search for `marker`.
///
/// This does not parse import syntax. An aliased or reformatted import that
/// lacks the marker text is reported as missing and will be duplicated.
pub fn has_button_import(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

/// Prepend `import_line` unless `marker` already occurs in `content`.
///
/// Returns the new content and whether the line was inserted.
pub fn ensure_button_import(content: &str, import_line: &str, marker: &str) -> (String, bool) {
    if has_button_import(content, marker) {
        return (content.to_string(), false);
    }

    let mut out = String::with_capacity(import_line.len() + 1 + content.len());
    out.push_str(import_line);
    out.push('\n');
    out.push_str(content);
    (out, true)
}
