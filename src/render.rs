//! Index page rendering and persistence.
//!
//! Layout:
//!
//! ```text
//! # <title>
//!
//! <intro>
//!
//! - [<display title>](<relative path>)
//!
//! ## <directory>
//!
//! - [<display title>](<relative path>)
//!
//! ---
//! *<updated label>: <timestamp>*
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Write as _;
use std::path::Path;

use crate::config::RenderConfig;
use crate::models::{DocFile, FileGroups};

/// Marker between the listing and the generation footer.
const FOOTER_RULE: &str = "---\n";

/// Render the full index page. `title_of` supplies each entry's display
/// title.
pub fn render_index<Tz, F>(
    groups: &FileGroups,
    config: &RenderConfig,
    generated_at: &DateTime<Tz>,
    mut title_of: F,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    F: FnMut(&DocFile) -> String,
{
    let mut content = format!("# {}\n\n{}\n\n", config.title, config.intro);

    if groups.is_empty() {
        let _ = write!(content, "*{}*\n\n", config.empty_notice);
    } else {
        for file in &groups.root {
            push_entry(&mut content, &title_of(file), file);
        }

        for group in &groups.dirs {
            let _ = write!(content, "\n## {}\n\n", group.key);
            for file in &group.files {
                push_entry(&mut content, &title_of(file), file);
            }
        }

        content.push('\n');
    }

    content.push_str(FOOTER_RULE);
    let _ = writeln!(
        content,
        "*{}: {}*",
        config.updated_label,
        generated_at.format(&config.timestamp_format)
    );

    content
}

fn push_entry(content: &mut String, title: &str, file: &DocFile) {
    let _ = writeln!(content, "- [{}]({})", title, file.relative_path);
}

/// The page without its generation footer line, for staleness checks.
pub fn without_timestamp(content: &str) -> &str {
    match content.rfind(FOOTER_RULE) {
        Some(pos) if pos == 0 || content[..pos].ends_with('\n') => {
            &content[..pos + FOOTER_RULE.len()]
        }
        _ => content,
    }
}

/// Replace the index file with `content`. The write is a plain truncate and
/// overwrite.
pub fn write_index(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write index file: {}", path.display()))
}
