//! Partition discovered documents by containing directory.

use std::collections::HashMap;

use crate::models::{DirGroup, DocFile, FileGroups};

/// Group `files` by the directory part of their relative path.
///
/// Input order is preserved inside each group, and directory groups appear
/// in the order their first file was seen.
pub fn group_files(files: Vec<DocFile>) -> FileGroups {
    let mut groups = FileGroups::default();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for file in files {
        let Some(dir) = file.parent_dir().map(str::to_string) else {
            groups.root.push(file);
            continue;
        };

        match positions.get(&dir) {
            Some(&idx) => groups.dirs[idx].files.push(file),
            None => {
                positions.insert(dir.clone(), groups.dirs.len());
                groups.dirs.push(DirGroup {
                    key: dir,
                    files: vec![file],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn doc(relative: &str) -> DocFile {
        let name = relative.rsplit('/').next().unwrap().to_string();
        DocFile {
            full_path: PathBuf::from("/docs").join(relative),
            relative_path: relative.to_string(),
            name,
            ext: "md".to_string(),
        }
    }

    fn keys(groups: &FileGroups) -> Vec<&str> {
        groups.dirs.iter().map(|g| g.key.as_str()).collect()
    }

    #[test]
    fn empty_input() {
        let groups = group_files(Vec::new());
        assert!(groups.is_empty());
        assert!(groups.root.is_empty());
        assert!(groups.dirs.is_empty());
    }

    #[test]
    fn root_files_split_from_directories() {
        let groups = group_files(vec![
            doc("api/auth.md"),
            doc("guide.md"),
            doc("notes/todo.md"),
            doc("zeta.md"),
        ]);
        let root: Vec<_> = groups.root.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(root, vec!["guide.md", "zeta.md"]);
        assert_eq!(keys(&groups), vec!["api", "notes"]);
        assert_eq!(groups.file_count(), 4);
    }

    #[test]
    fn nested_directories_use_full_relative_key() {
        let groups = group_files(vec![doc("a/b/c.md"), doc("a/d.md"), doc("a/b/e.md")]);
        assert_eq!(keys(&groups), vec!["a/b", "a"]);
        let ab: Vec<_> = groups.dirs[0].files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(ab, vec!["c.md", "e.md"]);
    }
}
