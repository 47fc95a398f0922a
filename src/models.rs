//! Core data types that flow through the indexing pipeline.

use std::path::PathBuf;

/// One discovered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    pub full_path: PathBuf,
    /// Path relative to the documentation root, always `/`-separated.
    pub relative_path: String,
    pub name: String,
    /// Lowercase extension without the leading dot.
    pub ext: String,
}

impl DocFile {
    /// Which title rule applies to this file.
    pub fn kind(&self) -> DocKind {
        DocKind::from_ext(&self.ext)
    }

    /// File name with the extension stripped.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) if pos > 0 => &self.name[..pos],
            _ => &self.name,
        }
    }

    /// Directory part of the relative path, `None` for files at the root.
    pub fn parent_dir(&self) -> Option<&str> {
        self.relative_path
            .rfind('/')
            .map(|pos| &self.relative_path[..pos])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Markdown,
    Html,
    /// Accepted by configuration but without a title rule.
    Other,
}

impl DocKind {
    pub fn from_ext(ext: &str) -> Self {
        match ext {
            "md" | "markdown" => DocKind::Markdown,
            "html" | "htm" => DocKind::Html,
            _ => DocKind::Other,
        }
    }
}

/// Documents partitioned by containing directory.
///
/// `root` holds files directly under the documentation root. `dirs` keeps
/// the remaining groups in the order their first file was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileGroups {
    pub root: Vec<DocFile>,
    pub dirs: Vec<DirGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirGroup {
    pub key: String,
    pub files: Vec<DocFile>,
}

impl FileGroups {
    pub fn file_count(&self) -> usize {
        self.root.len() + self.dirs.iter().map(|g| g.files.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(relative: &str) -> DocFile {
        let name = relative.rsplit('/').next().unwrap().to_string();
        let ext = name.rsplit_once('.').map(|(_, e)| e.to_lowercase()).unwrap_or_default();
        DocFile {
            full_path: PathBuf::from("/docs").join(relative),
            relative_path: relative.to_string(),
            name,
            ext,
        }
    }

    #[test]
    fn stem_strips_last_extension_only() {
        assert_eq!(doc("release.notes.md").stem(), "release.notes");
        assert_eq!(doc("guide.MD").stem(), "guide");
        assert_eq!(doc(".md").stem(), ".md");
    }

    #[test]
    fn parent_dir_of_nested_and_root_files() {
        assert_eq!(doc("a/b/c.md").parent_dir(), Some("a/b"));
        assert_eq!(doc("c.md").parent_dir(), None);
    }

    #[test]
    fn kind_follows_extension() {
        assert_eq!(doc("x.md").kind(), DocKind::Markdown);
        assert_eq!(doc("x.htm").kind(), DocKind::Html);
        assert_eq!(doc("x.txt").kind(), DocKind::Other);
    }
}
