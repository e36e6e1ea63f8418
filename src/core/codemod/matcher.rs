//! Button attribute matching.
//!
//! `ButtonMatcher` is the seam between "where are the buttons" and "what do
//! we replace them with". The shipped `ClassNameMatcher` is a plain textual
//! scan; a structural (AST-based) matcher can implement the same trait.

use regex::Regex;
use std::sync::LazyLock;

/// A button-like attribute assignment found in file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonMatch {
    /// Byte offset of the start of the whole `className="..."` span.
    pub start: usize,
    /// Byte offset one past the closing quote.
    pub end: usize,
    /// The captured class list between the quotes.
    pub class_list: String,
}

pub trait ButtonMatcher {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// All non-overlapping matches in order of appearance.
    fn find_buttons(&self, content: &str) -> Vec<ButtonMatch>;
}

// Lazy on both sides of the padding tokens: the capture ends at the first quote
// after `px-4 py-2`. The leading `.*?` may run past an earlier closing quote on
// the same line; `.` never crosses a newline.
static CLASS_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"className="(.*?px-4 py-2.*?)""#).unwrap());

/// Textual matcher for `className="... px-4 py-2 ..."` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameMatcher;

impl ButtonMatcher for ClassNameMatcher {
    fn name(&self) -> &'static str {
        "class-name"
    }

    fn find_buttons(&self, content: &str) -> Vec<ButtonMatch> {
        CLASS_NAME_PATTERN
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let classes = caps.get(1)?;
                Some(ButtonMatch {
                    start: whole.start(),
                    end: whole.end(),
                    class_list: classes.as_str().to_string(),
                })
            })
            .collect()
    }
}
