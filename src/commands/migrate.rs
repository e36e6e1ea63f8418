use clap::Args;
use std::path::PathBuf;

use button_codemod::codemod;
use button_codemod::config::CodemodConfig;
use button_codemod::MigrationReport;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct MigrateArgs {
    /// JSON config file (roots, extension, importLine, importMarker)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory that relative roots are resolved against (default: cwd)
    #[arg(long)]
    base: Option<PathBuf>,
    /// Root directory to search; repeat for several (replaces configured roots)
    #[arg(long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,
    /// File extension to rewrite (default: tsx)
    #[arg(long)]
    extension: Option<String>,
    /// Compute and report rewrites without writing files
    #[arg(long)]
    dry_run: bool,
}

pub fn run(args: MigrateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MigrationReport> {
    let config = resolve_config(&args)?;
    let report = codemod::run_migration(&config, args.dry_run);

    let exit_code = if report.has_failures() { 1 } else { 0 };

    Ok((report, exit_code))
}

fn resolve_config(args: &MigrateArgs) -> button_codemod::Result<CodemodConfig> {
    let mut config = match &args.config {
        Some(path) => CodemodConfig::load(path)?,
        None => CodemodConfig::default(),
    };

    config = config.with_roots(args.roots.clone());

    if let Some(extension) = &args.extension {
        config = config.with_extension(extension)?;
    }

    let base = match &args.base {
        Some(base) => base.clone(),
        None => std::env::current_dir().map_err(|e| {
            button_codemod::Error::internal_io(e.to_string(), Some("resolve cwd".to_string()))
        })?,
    };

    Ok(config.resolve_roots(&base))
}
