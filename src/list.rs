//! `list` command: discovered documents with their group and display title.

use anyhow::Result;

use crate::config::Config;
use crate::group::group_files;
use crate::title::display_title;
use crate::walker::scan_docs;

/// Group label printed for files directly under the root.
const ROOT_LABEL: &str = "(root)";

pub fn list_docs(config: &Config) -> Result<()> {
    let groups = group_files(scan_docs(config)?);

    println!("{:<24} {:<40} TITLE", "GROUP", "PATH");
    for file in &groups.root {
        println!(
            "{:<24} {:<40} {}",
            ROOT_LABEL,
            file.relative_path,
            display_title(file)
        );
    }
    for group in &groups.dirs {
        for file in &group.files {
            println!(
                "{:<24} {:<40} {}",
                group.key,
                file.relative_path,
                display_title(file)
            );
        }
    }

    println!();
    println!("{} document(s) under {}", groups.file_count(), config.docs.root.display());

    Ok(())
}
