//! File discovery: recursive, extension-filtered walk of the search roots.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Lazy depth-first walk over one root.
///
/// Entries of each directory are visited in sorted order, files before
/// subdirectories, so repeated runs over the same tree yield the same
/// sequence. Unreadable directories contribute nothing. Symlinked
/// directories are not followed.
#[derive(Debug)]
pub struct FileWalker {
    suffix: String,
    dirs: Vec<PathBuf>,
    ready: VecDeque<PathBuf>,
}

impl FileWalker {
    fn new(root: &Path, extension: &str) -> Self {
        Self {
            suffix: format!(".{}", extension),
            dirs: vec![root.to_path_buf()],
            ready: VecDeque::new(),
        }
    }

    fn expand(&mut self, dir: &Path) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };

        let mut entries: Vec<_> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                subdirs.push(path);
            } else if path.is_file() && self.matches(&path) {
                self.ready.push_back(path);
            }
        }

        // Stack: push in reverse so the first sorted subdirectory is walked first.
        self.dirs.extend(subdirs.into_iter().rev());
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(path);
            }
            let dir = self.dirs.pop()?;
            self.expand(&dir);
        }
    }
}

/// Start a walk of `root`, or `None` when the root is not a directory.
fn walk_root(root: &Path, extension: &str) -> Option<FileWalker> {
    if root.is_dir() {
        Some(FileWalker::new(root, extension))
    } else {
        None
    }
}

/// Every matching file under every root, in root order, as a lazy sequence.
///
/// Missing roots silently contribute nothing; callers that report skipped
/// roots check `Path::is_dir` themselves.
pub fn discover_files<'a>(
    roots: &'a [PathBuf],
    extension: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    roots
        .iter()
        .filter_map(move |root| walk_root(root, extension))
        .flatten()
}
