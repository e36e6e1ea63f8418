//! Public output types for codemod runs.
//!
//! These are serialized as the `data` payload of the CLI's JSON response and
//! are also the return value of the library's batch driver.

use crate::codemod::rewrite::Replacement;
use crate::codemod::variant::Variant;
use serde::Serialize;

// ============================================================================
// Per-root outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootStatus {
    Scanned,
    /// Root did not exist or was not a directory.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOutcome {
    pub root: String,
    pub status: RootStatus,
    pub files: u32,
}

// ============================================================================
// Per-file outcomes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Rewritten,
    Unchanged,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VariantCounts {
    pub primary: u32,
    pub danger: u32,
    pub default: u32,
}

impl VariantCounts {
    pub fn record(&mut self, variant: Variant) {
        match variant {
            Variant::Primary => self.primary += 1,
            Variant::Danger => self.danger += 1,
            Variant::Default => self.default += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.primary + self.danger + self.default
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub file: String,
    pub status: FileStatus,
    pub buttons: u32,
    pub import_added: bool,
    pub variants: VariantCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replacements: Vec<Replacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Run report
// ============================================================================

/// Summary of a whole migration run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub dry_run: bool,
    pub matcher: String,
    pub rewritten: u32,
    pub unchanged: u32,
    pub failed: u32,
    pub skipped_roots: u32,
    pub total_buttons: u32,
    pub variants: VariantCounts,
    pub roots: Vec<RootOutcome>,
    pub files: Vec<FileOutcome>,
}

impl MigrationReport {
    pub fn new(dry_run: bool, matcher: &str) -> Self {
        Self {
            dry_run,
            matcher: matcher.to_string(),
            ..Self::default()
        }
    }

    pub fn record_root(&mut self, root: String, status: RootStatus, files: u32) {
        if status == RootStatus::Skipped {
            self.skipped_roots += 1;
        }
        self.roots.push(RootOutcome {
            root,
            status,
            files,
        });
    }

    pub fn record_file(
        &mut self,
        file: String,
        changed: bool,
        import_added: bool,
        replacements: Vec<Replacement>,
    ) {
        let mut variants = VariantCounts::default();
        for replacement in &replacements {
            variants.record(replacement.variant);
        }

        let status = if changed {
            self.rewritten += 1;
            FileStatus::Rewritten
        } else {
            self.unchanged += 1;
            FileStatus::Unchanged
        };
        self.total_buttons += variants.total();
        self.variants.primary += variants.primary;
        self.variants.danger += variants.danger;
        self.variants.default += variants.default;
        self.files.push(FileOutcome {
            file,
            status,
            buttons: variants.total(),
            import_added,
            variants,
            replacements,
            error: None,
        });
    }

    pub fn record_failure(&mut self, file: String, error: String) {
        self.failed += 1;
        self.files.push(FileOutcome {
            file,
            status: FileStatus::Failed,
            buttons: 0,
            import_added: false,
            variants: VariantCounts::default(),
            replacements: Vec::new(),
            error: Some(error),
        });
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacement(original: &str, variant: Variant) -> Replacement {
        Replacement {
            original: original.to_string(),
            variant,
        }
    }

    #[test]
    fn counters_follow_recorded_outcomes() {
        let mut report = MigrationReport::new(false, "class-name");
        let replacements = vec![
            replacement("className=\"px-4 py-2\"", Variant::Primary),
            replacement("className=\"px-4 py-2 bg-red-600\"", Variant::Danger),
        ];

        report.record_root("src/pages".to_string(), RootStatus::Scanned, 2);
        report.record_root("src/missing".to_string(), RootStatus::Skipped, 0);
        report.record_file("a.tsx".to_string(), true, true, replacements);
        report.record_file("b.tsx".to_string(), false, false, Vec::new());
        report.record_failure("c.tsx".to_string(), "IO error".to_string());

        assert_eq!(report.rewritten, 1);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped_roots, 1);
        assert_eq!(report.total_buttons, 2);
        assert_eq!(report.variants.danger, 1);
        assert_eq!(report.files[0].variants.primary, 1);
        assert_eq!(report.files[0].replacements.len(), 2);
        assert!(report.has_failures());
    }

    #[test]
    fn rewritten_file_lists_original_attributes() {
        let mut report = MigrationReport::new(false, "class-name");
        report.record_file(
            "a.tsx".to_string(),
            true,
            false,
            vec![replacement("className=\"px-4 py-2 bg-white\"", Variant::Default)],
        );

        let json = serde_json::to_value(&report).unwrap();
        let listed = &json["files"][0]["replacements"][0];
        assert_eq!(listed["original"], "className=\"px-4 py-2 bg-white\"");
        assert_eq!(listed["variant"], "default");
    }

    #[test]
    fn serializes_camel_case_with_lowercase_statuses() {
        let mut report = MigrationReport::new(true, "class-name");
        report.record_failure("c.tsx".to_string(), "IO error".to_string());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dryRun"], true);
        assert_eq!(json["files"][0]["status"], "failed");
        assert_eq!(json["files"][0]["importAdded"], false);
        assert_eq!(json["files"][0]["error"], "IO error");
        assert!(json["files"][0].get("replacements").is_none());
    }
}
