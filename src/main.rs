use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use textpatch::config::{load_block, PatchConfig, PatchDefinition};
use textpatch::diff::{line_stats, render_unified_diff};
use textpatch::{PatchOptions, Patcher};

/// Message printed once the target has been rewritten
const DONE_MESSAGE: &str = "File updated";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to patch
    target: Option<PathBuf>,

    /// Literal text to search for
    #[arg(short, long, conflicts_with = "search_file")]
    search: Option<String>,

    /// Read the search text verbatim from a file
    #[arg(long)]
    search_file: Option<PathBuf>,

    /// Literal text to put in place of the first match
    #[arg(short, long, conflicts_with = "replace_file")]
    replace: Option<String>,

    /// Read the replacement text verbatim from a file
    #[arg(long)]
    replace_file: Option<PathBuf>,

    /// Patch definition file (json, yaml or toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the change as a unified diff without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Print a unified diff of the change after writing
    #[arg(long)]
    diff: bool,

    /// Fail if the search text is not found instead of rewriting the file unchanged
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command line values as a config layer
    fn overrides(&self) -> Result<PatchConfig> {
        let search = match &self.search_file {
            Some(path) => Some(
                load_block(path)
                    .with_context(|| format!("Failed to read search text from {}", path.display()))?,
            ),
            None => self.search.clone(),
        };
        let replace = match &self.replace_file {
            Some(path) => Some(load_block(path).with_context(|| {
                format!("Failed to read replacement text from {}", path.display())
            })?),
            None => self.replace.clone(),
        };

        Ok(PatchConfig {
            target: self.target.clone(),
            search,
            replace,
            strict: self.strict,
        })
    }

    /// Definition file (if any) with command line values layered on top
    fn definition(&self) -> Result<PatchDefinition> {
        let base = match &self.config {
            Some(path) => PatchConfig::load(path)
                .with_context(|| format!("Failed to load patch definition: {}", path.display()))?,
            None => PatchConfig::default(),
        };
        Ok(base.merge(self.overrides()?).into_definition()?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    textpatch::init_with_logger(cli.verbose)?;

    let definition = cli.definition()?;
    debug!("Patching {}", definition.target.display());

    let patcher = Patcher::new(PatchOptions {
        dry_run: cli.dry_run,
        strict: definition.strict,
    });
    let outcome = patcher
        .apply(&definition.target, &definition.search, &definition.replace)
        .with_context(|| format!("Failed to patch {}", definition.target.display()))?;

    let (inserted, deleted) = line_stats(&outcome.before, &outcome.after);
    info!("{} lines inserted, {} deleted", inserted, deleted);

    if cli.dry_run || cli.diff {
        print!(
            "{}",
            render_unified_diff(&outcome.path, &outcome.before, &outcome.after)
        );
    }

    if outcome.written {
        println!("{}", DONE_MESSAGE);
    }

    Ok(())
}
