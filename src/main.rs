//! # docs-index CLI
//!
//! Rewrites the index page of a documentation directory.
//!
//! ## Usage
//!
//! ```bash
//! docs-index [--config docs-index.toml] [--root docs] [--output index.md] [command]
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | *(none)* / `generate` | Rewrite the index file |
//! | `generate --stdout` | Print the index instead of writing it |
//! | `check` | Exit non-zero when the index is missing or out of date |
//! | `list` | Show discovered documents with their groups and titles |

use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docs_index::config;
use docs_index::index::{run_index, IndexMode, IndexOutcome};
use docs_index::list;

/// docs-index — regenerate a grouped index page for a documentation tree.
///
/// With no command, scans `./docs` and rewrites `./docs/index.md`.
#[derive(Parser)]
#[command(
    name = "docs-index",
    about = "Regenerate a grouped index page for a documentation directory",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./docs-index.toml` when that file exists; otherwise the
    /// built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Documentation root, overriding `[docs].root`.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Index file name inside the root, overriding `[docs].output`.
    #[arg(long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the index file.
    Generate {
        /// Print the rendered index to stdout instead of writing it.
        #[arg(long)]
        stdout: bool,
    },

    /// Verify the index is up to date, ignoring the timestamp line.
    ///
    /// Exits non-zero when the index is missing or would change.
    Check,

    /// List discovered documents with their groups and display titles.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::resolve_config(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        cfg.docs.root = root;
    }
    if let Some(output) = cli.output {
        cfg.docs.output = output;
    }
    cfg.validate()?;

    match cli.command.unwrap_or(Commands::Generate { stdout: false }) {
        Commands::Generate { stdout: false } => {
            let report = run_index(&cfg, IndexMode::Write)?;
            println!("Updated {}", report.output.display());
            println!("Indexed files: {}", report.file_count);
        }
        Commands::Generate { stdout: true } => {
            let report = run_index(&cfg, IndexMode::Render)?;
            if let IndexOutcome::Rendered(content) = report.outcome {
                print!("{}", content);
            }
        }
        Commands::Check => {
            let report = run_index(&cfg, IndexMode::Check)?;
            match report.outcome {
                IndexOutcome::UpToDate => {
                    println!(
                        "{} is up to date ({} files)",
                        report.output.display(),
                        report.file_count
                    );
                }
                IndexOutcome::Missing => {
                    bail!("{} does not exist; run docs-index", report.output.display())
                }
                _ => bail!("{} is out of date; run docs-index", report.output.display()),
            }
        }
        Commands::List => {
            list::list_docs(&cfg)?;
        }
    }

    Ok(())
}
