//! Display-title extraction.
//!
//! Markdown files use their first `# ` heading, HTML files their `<title>`
//! element. Anything that cannot be read or has no title falls back to the
//! file name without its extension; extraction never fails the run.

use std::path::PathBuf;

use crate::models::{DocFile, DocKind};

/// Reason a file produced no title of its own.
#[derive(Debug)]
pub enum TitleError {
    Read { path: PathBuf, source: std::io::Error },
    NotFound,
    Unsupported(String),
}

impl std::fmt::Display for TitleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            TitleError::NotFound => write!(f, "no title found"),
            TitleError::Unsupported(ext) => write!(f, "no title rule for .{} files", ext),
        }
    }
}

impl std::error::Error for TitleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TitleError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Title for the index entry of `file`. Always non-empty for a non-empty
/// file name.
pub fn display_title(file: &DocFile) -> String {
    match extract_title(file) {
        Ok(title) => title,
        Err(err) => {
            if let TitleError::Read { .. } = err {
                eprintln!("Warning: title extraction failed: {}", err);
            }
            file.stem().to_string()
        }
    }
}

/// Title taken from the file's content.
pub fn extract_title(file: &DocFile) -> Result<String, TitleError> {
    let kind = file.kind();
    if kind == DocKind::Other {
        return Err(TitleError::Unsupported(file.ext.clone()));
    }

    let bytes = std::fs::read(&file.full_path).map_err(|source| TitleError::Read {
        path: file.full_path.clone(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let found = match kind {
        DocKind::Markdown => markdown_title(&content),
        DocKind::Html => html_title(&content),
        DocKind::Other => None,
    };
    found.ok_or(TitleError::NotFound)
}

/// First level-one ATX heading: a line starting with `#` and whitespace.
pub fn markdown_title(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Text of the first `<title ...>...</title>` element, matched
/// case-insensitively. The text may not contain `<`.
pub fn html_title(content: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `content`.
    let lower = content.to_ascii_lowercase();
    let mut from = 0;

    while let Some(found) = lower[from..].find("<title") {
        let open = from + found;
        from = open + 1;

        let Some(gt) = lower[open..].find('>') else {
            break;
        };
        let text_start = open + gt + 1;
        let text_end = match lower[text_start..].find('<') {
            Some(lt) => text_start + lt,
            None => break,
        };
        if !lower[text_end..].starts_with("</title>") {
            continue;
        }

        let title = content[text_start..text_end].trim();
        if title.is_empty() {
            return None;
        }
        return Some(title.to_string());
    }

    None
}
