//! Button variant classification from Tailwind utility classes.

use serde::Serialize;

/// Visual role of a migrated button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Danger,
    Default,
}

const PRIMARY_TOKENS: &[&str] = &["bg-indigo-600", "bg-blue-600"];
const DANGER_TOKENS: &[&str] = &["bg-red-600"];
const DEFAULT_TOKENS: &[&str] = &["bg-white", "bg-gray-300"];

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Danger => "danger",
            Variant::Default => "default",
        }
    }

    /// Classify a class list. First match wins: primary, then danger, then
    /// default. Lists with no recognized color token fall back to primary.
    ///
    /// Tokens are plain substring tests, so `hover:bg-gray-300` counts as
    /// `bg-gray-300`.
    pub fn classify(class_list: &str) -> Self {
        let has_any = |tokens: &[&str]| tokens.iter().any(|t| class_list.contains(t));

        if has_any(PRIMARY_TOKENS) {
            Variant::Primary
        } else if has_any(DANGER_TOKENS) {
            Variant::Danger
        } else if has_any(DEFAULT_TOKENS) {
            Variant::Default
        } else {
            Variant::Primary
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
