//! # docs-index
//!
//! Regenerates a single index page for a documentation directory.
//!
//! The tool walks the documentation root, pulls a display title out of every
//! Markdown (`# Heading`) and HTML (`<title>`) document, groups documents by
//! containing directory, and rewrites `index.md` inside the root.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────┐   ┌─────────┐   ┌──────────┐   ┌──────────┐
//! │ walker │──▶│  group  │──▶│  render  │──▶│ index.md │
//! └────────┘   └─────────┘   └────┬─────┘   └──────────┘
//!                                 │
//!                            ┌────┴────┐
//!                            │  title  │
//!                            └─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! docs-index                     # rewrite docs/index.md
//! docs-index generate --stdout   # print without writing
//! docs-index check               # fail when docs/index.md is stale
//! docs-index list                # show discovered documents and titles
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`walker`] | Documentation tree discovery |
//! | [`collate`] | Locale-aware path ordering |
//! | [`title`] | Display-title extraction |
//! | [`group`] | Grouping by directory |
//! | [`render`] | Index page rendering and writing |
//! | [`index`] | Pipeline orchestration |
//! | [`list`] | Document listing |

pub mod collate;
pub mod config;
pub mod group;
pub mod index;
pub mod list;
pub mod models;
pub mod render;
pub mod title;
pub mod walker;

use anyhow::Result;

/// Regenerate the index with the default configuration: `./docs-index.toml`
/// when present, otherwise `./docs` and `index.md`.
pub fn generate_docs_index() -> Result<()> {
    let config = config::resolve_config(None)?;
    let report = index::run_index(&config, index::IndexMode::Write)?;
    println!("Updated {}", report.output.display());
    println!("Indexed files: {}", report.file_count);
    Ok(())
}
