//! Indexing pipeline orchestration.
//!
//! Runs the full flow: walk → group → extract titles → render, then writes,
//! prints, or compares the result depending on [`IndexMode`].

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use crate::config::Config;
use crate::group::group_files;
use crate::render::{render_index, without_timestamp, write_index};
use crate::title::display_title;
use crate::walker::scan_docs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// Overwrite the index file.
    Write,
    /// Render only; the page is returned in the report.
    Render,
    /// Compare against the existing index, ignoring the timestamp.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    Written,
    Rendered(String),
    UpToDate,
    Stale,
    Missing,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct IndexReport {
    pub output: PathBuf,
    pub file_count: usize,
    pub outcome: IndexOutcome,
}

pub fn run_index(config: &Config, mode: IndexMode) -> Result<IndexReport> {
    let files = scan_docs(config)?;
    let file_count = files.len();
    let groups = group_files(files);

    let content = render_index(&groups, &config.render, &Local::now(), display_title);
    let output = config.output_path();

    let outcome = match mode {
        IndexMode::Write => {
            write_index(&output, &content)?;
            IndexOutcome::Written
        }
        IndexMode::Render => IndexOutcome::Rendered(content),
        IndexMode::Check => {
            if !output.exists() {
                IndexOutcome::Missing
            } else {
                let existing = std::fs::read_to_string(&output).with_context(|| {
                    format!("Failed to read existing index: {}", output.display())
                })?;
                if without_timestamp(&existing) == without_timestamp(&content) {
                    IndexOutcome::UpToDate
                } else {
                    IndexOutcome::Stale
                }
            }
        }
    };

    Ok(IndexReport {
        output,
        file_count,
        outcome,
    })
}
