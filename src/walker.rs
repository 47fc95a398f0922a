//! Documentation tree discovery.
//!
//! Walks the configured root, keeps files whose extension is accepted, and
//! skips the generated index itself so reruns never list their own output.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::WalkDir;

use crate::collate::PathCollator;
use crate::config::Config;
use crate::models::DocFile;

pub fn scan_docs(config: &Config) -> Result<Vec<DocFile>> {
    let docs = &config.docs;

    let root = &docs.root;
    if !root.is_dir() {
        bail!("Documentation root does not exist: {}", root.display());
    }

    let exclude_set = build_globset(&docs.exclude_globs)?;
    let extensions: Vec<String> = docs.extensions.iter().map(|e| e.to_lowercase()).collect();

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(docs.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name == docs.output {
            continue;
        }

        let ext = match extension_of(&name) {
            Some(ext) if extensions.contains(&ext) => ext,
            _ => continue,
        };

        let path = entry.path();
        let rel_str = relative_path(root, path);

        if exclude_set.is_match(&rel_str) {
            continue;
        }

        files.push(DocFile {
            full_path: path.to_path_buf(),
            relative_path: rel_str,
            name,
            ext,
        });
    }

    let mut collator = PathCollator::new();
    files.sort_by(|a, b| collator.compare(&a.relative_path, &b.relative_path));

    Ok(files)
}

/// Lowercase extension after the last dot. A bare dotfile such as `.md`
/// counts as having the extension `md`.
fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => Some(name[pos + 1..].to_lowercase()),
        _ => None,
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
