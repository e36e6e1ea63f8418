//! Codemod configuration: search roots, file extension, and the Button import.
//!
//! Defaults mirror the conventional `src/pages` + `src/components` layout of a
//! React/Tailwind app. A JSON file can override any field; CLI flags override
//! the file.

use crate::error::{Error, Result};
use crate::utils::io;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOTS: &[&str] = &["src/pages", "src/components"];
pub const DEFAULT_EXTENSION: &str = "tsx";
pub const DEFAULT_IMPORT_LINE: &str = "import Button from '../components/Button';";
pub const DEFAULT_IMPORT_MARKER: &str = "import Button from";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodemodConfig {
    /// Directories searched recursively for candidate files.
    pub roots: Vec<PathBuf>,
    /// File extension without the leading dot.
    pub extension: String,
    /// Line prepended when the import marker is absent (newline added on insert).
    pub import_line: String,
    /// Substring whose presence means the Button import already exists.
    pub import_marker: String,
}

impl Default for CodemodConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            import_line: DEFAULT_IMPORT_LINE.to_string(),
            import_marker: DEFAULT_IMPORT_MARKER.to_string(),
        }
    }
}

impl CodemodConfig {
    /// Load a config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = io::read_file(path, &format!("read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace roots when any are given.
    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        if !roots.is_empty() {
            self.roots = roots;
        }
        self
    }

    /// Set the extension, tolerating a leading dot (`.tsx` == `tsx`).
    pub fn with_extension(mut self, extension: &str) -> Result<Self> {
        self.extension = normalize_extension(extension);
        self.validate()?;
        Ok(self)
    }

    /// Resolve relative roots against `base`.
    pub fn resolve_roots(mut self, base: &Path) -> Self {
        self.roots = self
            .roots
            .into_iter()
            .map(|root| if root.is_absolute() { root } else { base.join(root) })
            .collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            return Err(
                Error::validation_invalid_argument("extension", "Extension must not be empty")
                    .with_hint("Use e.g. --extension tsx"),
            );
        }
        if self.import_marker.is_empty() {
            return Err(Error::config_invalid_value(
                "importMarker",
                None,
                "Import marker must not be empty",
            ));
        }
        if self.import_line.contains('\n') {
            return Err(Error::config_invalid_value(
                "importLine",
                Some(self.import_line.clone()),
                "Import line must be a single line",
            ));
        }
        Ok(())
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_string()
}
