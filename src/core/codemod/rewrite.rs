//! Button rewriter: a pure content transform plus a thin read/write shell.

use super::import::ensure_button_import;
use super::matcher::ButtonMatcher;
use super::variant::Variant;
use crate::config::CodemodConfig;
use crate::error::Result;
use crate::utils::io;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// A single attribute replacement, reported per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// The original `className="..."` text.
    pub original: String,
    pub variant: Variant,
}

/// Outcome of transforming one file's content.
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub content: String,
    /// Whether `content` differs from the input.
    pub changed: bool,
    pub import_added: bool,
    pub replacements: Vec<Replacement>,
}

/// Transform file content without touching the filesystem.
///
/// The import check runs first and unconditionally, then every button match
/// in the (possibly import-prefixed) content is replaced with
/// `variant="<value>"`.
pub fn rewrite_content(
    content: &str,
    matcher: &dyn ButtonMatcher,
    config: &CodemodConfig,
) -> RewriteOutcome {
    let (with_import, import_added) =
        ensure_button_import(content, &config.import_line, &config.import_marker);

    let matches = matcher.find_buttons(&with_import);
    let mut out = String::with_capacity(with_import.len());
    let mut replacements = Vec::with_capacity(matches.len());
    let mut cursor = 0;

    for m in matches {
        let variant = Variant::classify(&m.class_list);
        out.push_str(&with_import[cursor..m.start]);
        // Writing into a String cannot fail.
        let _ = write!(out, "variant=\"{}\"", variant);
        replacements.push(Replacement {
            original: with_import[m.start..m.end].to_string(),
            variant,
        });
        cursor = m.end;
    }
    out.push_str(&with_import[cursor..]);

    RewriteOutcome {
        changed: out != content,
        content: out,
        import_added,
        replacements,
    }
}

/// Read, transform, and (unless unchanged or `dry_run`) write back one file.
///
/// A read failure returns before any write is attempted. A write failure is
/// returned as-is; there is no rollback.
pub fn rewrite_file(
    path: &Path,
    matcher: &dyn ButtonMatcher,
    config: &CodemodConfig,
    dry_run: bool,
) -> Result<RewriteOutcome> {
    let original = io::read_file(path, &format!("read {}", path.display()))?;
    let outcome = rewrite_content(&original, matcher, config);

    if outcome.changed && !dry_run {
        io::write_file(path, &outcome.content, &format!("write {}", path.display()))?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codemod::matcher::{ButtonMatch, ClassNameMatcher};

    fn rewrite(content: &str) -> RewriteOutcome {
        rewrite_content(content, &ClassNameMatcher, &CodemodConfig::default())
    }

    const IMPORT: &str = "import Button from '../components/Button';\n";

    #[test]
    fn replaces_attribute_with_variant() {
        let out = rewrite("<button className=\"px-4 py-2 bg-indigo-600 text-white rounded\">Save</button>\n");
        assert_eq!(
            out.content,
            format!("{}<button variant=\"primary\">Save</button>\n", IMPORT)
        );
        assert!(out.import_added);
        assert_eq!(out.replacements.len(), 1);
        assert_eq!(out.replacements[0].variant, Variant::Primary);
        assert_eq!(
            out.replacements[0].original,
            "className=\"px-4 py-2 bg-indigo-600 text-white rounded\""
        );
    }

    #[test]
    fn existing_import_is_not_duplicated() {
        let input = format!("{}<button className=\"px-4 py-2 bg-red-600\">X</button>\n", IMPORT);
        let out = rewrite(&input);
        assert!(!out.import_added);
        assert_eq!(out.content.matches("import Button from").count(), 1);
        assert!(out.content.contains("variant=\"danger\""));
    }

    #[test]
    fn non_matching_attributes_are_byte_identical() {
        let body = "<div className=\"flex gap-2\">\n  <span className=\"px-2 py-1\">hi</span>\n</div>\n";
        let out = rewrite(body);
        assert_eq!(out.content, format!("{}{}", IMPORT, body));
        assert!(out.replacements.is_empty());
    }

    #[test]
    fn no_buttons_but_import_present_is_unchanged() {
        let body = format!("{}export const A = () => null;\n", IMPORT);
        let out = rewrite(&body);
        assert!(!out.changed);
    }

    #[test]
    fn rewrite_is_idempotent() {
        let first = rewrite("<button className=\"px-4 py-2 bg-white\">Cancel</button>\n");
        let second = rewrite(&first.content);
        assert!(first.changed);
        assert!(!second.changed);
    }

    #[test]
    fn multibyte_content_around_matches_is_preserved() {
        let out = rewrite("<p>Café ✓</p><button className=\"px-4 py-2 bg-red-600\">Löschen</button>\n");
        assert!(out
            .content
            .ends_with("<p>Café ✓</p><button variant=\"danger\">Löschen</button>\n"));
    }

    struct FixedMatcher(Vec<ButtonMatch>);

    impl ButtonMatcher for FixedMatcher {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn find_buttons(&self, _content: &str) -> Vec<ButtonMatch> {
            self.0.clone()
        }
    }

    #[test]
    fn alternate_matcher_drives_replacement() {
        let config = CodemodConfig::default();
        let content = format!("{}<b data=\"bg-red-600\"/>", IMPORT);
        let start = content.find("data=").unwrap();
        let end = content.len() - 2;
        let matcher = FixedMatcher(vec![ButtonMatch {
            start,
            end,
            class_list: "bg-red-600".to_string(),
        }]);

        let out = rewrite_content(&content, &matcher, &config);
        assert_eq!(out.content, format!("{}<b variant=\"danger\"/>", IMPORT));
    }

    #[test]
    fn rewrite_file_skips_write_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Plain.tsx");
        let body = format!("{}export const A = 1;\n", IMPORT);
        std::fs::write(&path, &body).unwrap();

        let out = rewrite_file(&path, &ClassNameMatcher, &CodemodConfig::default(), false).unwrap();
        assert!(!out.changed);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), body);
    }

    #[cfg(unix)]
    #[test]
    fn rewrite_file_reports_write_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Locked.tsx");
        let body = "<button className=\"px-4 py-2 bg-red-600\">X</button>\n";
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users ignore permission bits.
        if std::fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = rewrite_file(&path, &ClassNameMatcher, &CodemodConfig::default(), false)
            .unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert!(err.summary().contains("write"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), body);
    }
}
