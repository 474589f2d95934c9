//! Index file generation
//!
//! The index lists every file in the output directory as a `[[name]]`
//! cross-reference so that a note-taking tool can link to each page.

use crate::output::{write_atomic, OutputError, OutputResult};
use std::path::{Path, PathBuf};

/// Builds the index file for a directory
///
/// Lists every plain file currently in `directory` (subdirectories and the
/// index file itself are skipped) in the order the filesystem returns them.
/// That order is not stable across platforms or runs.
///
/// # Arguments
///
/// * `directory` - Directory whose files are listed; the index is written here
/// * `index_file` - File name of the index, usually `INDEX.md`
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written index
/// * `Err(OutputError::DirectoryNotFound)` - `directory` is missing or not a directory
/// * `Err(OutputError)` - Listing or writing failed
pub fn build_index(directory: &Path, index_file: &str) -> OutputResult<PathBuf> {
    if !directory.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == index_file {
            continue;
        }
        files.push(name);
    }

    let content = format_index(&directory_name(directory), &files);

    let index_path = directory.join(index_file);
    write_atomic(&index_path, &content)?;

    tracing::info!(
        "Index file {} created in {} ({} entries)",
        index_file,
        directory.display(),
        files.len()
    );

    Ok(index_path)
}

/// Formats the index body
///
/// # Example
///
/// ```
/// use markdown_harvester::output::format_index;
///
/// let index = format_index("notes", &["a.md".to_string(), "b.md".to_string()]);
/// assert_eq!(index, "# Files in folder notes\n\n1. [[a.md]]\n2. [[b.md]]\n");
/// ```
pub fn format_index(directory_name: &str, files: &[String]) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Files in folder {}\n\n", directory_name));

    for (i, name) in files.iter().enumerate() {
        md.push_str(&format!("{}. [[{}]]\n", i + 1, name));
    }

    md
}

/// Name shown in the index header; falls back to the full path for `.` or `/`
fn directory_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}
