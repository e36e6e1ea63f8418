// Public modules
pub mod codemod;
pub mod config;
pub mod error;
pub mod output;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{FileOutcome, FileStatus, MigrationReport, RootOutcome, RootStatus, VariantCounts};
