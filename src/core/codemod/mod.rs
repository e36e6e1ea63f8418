//! Button codemod — migrate inline utility-class buttons to the shared Button.
//!
//! Walks the configured roots, and for every matching file:
//! 1. Ensures the Button import is present (weak substring check)
//! 2. Finds `className="... px-4 py-2 ..."` attributes
//! 3. Classifies each by color token into a `Variant`
//! 4. Replaces the attribute with `variant="<value>"` and writes the file back
//!
//! Each file is independent. Read/write failures are recorded and the run
//! moves on to the next file.

pub mod discover;
pub mod import;
pub mod matcher;
pub mod rewrite;
pub mod variant;

pub use discover::{discover_files, FileWalker};
pub use import::{ensure_button_import, has_button_import};
pub use matcher::{ButtonMatch, ButtonMatcher, ClassNameMatcher};
pub use rewrite::{rewrite_content, rewrite_file, Replacement, RewriteOutcome};
pub use variant::Variant;

use crate::config::CodemodConfig;
use crate::output::{MigrationReport, RootStatus};

/// Run the migration over every configured root with the default matcher.
pub fn run_migration(config: &CodemodConfig, dry_run: bool) -> MigrationReport {
    run_migration_with(config, &ClassNameMatcher, dry_run)
}

/// Run the migration with a caller-supplied matcher.
pub fn run_migration_with(
    config: &CodemodConfig,
    matcher: &dyn ButtonMatcher,
    dry_run: bool,
) -> MigrationReport {
    let mut report = MigrationReport::new(dry_run, matcher.name());

    for root in &config.roots {
        let root_label = root.display().to_string();
        if !root.is_dir() {
            log_status!("codemod", "Skipping {} (not a directory)", root_label);
            report.record_root(root_label, RootStatus::Skipped, 0);
            continue;
        }

        let mut files = 0;
        for path in discover_files(std::slice::from_ref(root), &config.extension) {
            files += 1;
            let label = path.display().to_string();

            match rewrite_file(&path, matcher, config, dry_run) {
                Ok(outcome) => {
                    if outcome.changed {
                        log_status!(
                            "codemod",
                            "{} {} ({} button(s){})",
                            if dry_run { "Would rewrite" } else { "Rewrote" },
                            label,
                            outcome.replacements.len(),
                            if outcome.import_added { ", import added" } else { "" }
                        );
                    } else {
                        log_status!("codemod", "Unchanged {}", label);
                    }
                    report.record_file(
                        label,
                        outcome.changed,
                        outcome.import_added,
                        outcome.replacements,
                    );
                }
                Err(err) => {
                    log_status!("codemod", "Failed {}: {}", label, err.summary());
                    report.record_failure(label, err.summary());
                }
            }
        }

        report.record_root(root_label, RootStatus::Scanned, files);
    }

    report
}
