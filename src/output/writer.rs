//! Page file writer

use crate::content::PageArtifact;
use crate::output::{write_atomic, OutputResult};
use std::path::{Path, PathBuf};

/// Creates the output directory and its parents if they are missing
pub fn ensure_output_dir(directory: &Path) -> OutputResult<()> {
    if !directory.is_dir() {
        tracing::info!("Creating output directory {}", directory.display());
        std::fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Writes a converted page to `<directory>/<sanitized name>.md`
///
/// An existing file with the same name is replaced; two pages whose titles
/// sanitize to the same name therefore keep only the later one. The write is
/// all-or-nothing.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - The file could not be written
pub fn write_page(directory: &Path, artifact: &PageArtifact) -> OutputResult<PathBuf> {
    let path = directory.join(format!("{}.md", artifact.sanitized_name));

    if path.exists() {
        tracing::debug!("Overwriting existing page file {}", path.display());
    }

    write_atomic(&path, &artifact.markdown_body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputError;
    use tempfile::TempDir;

    fn artifact(name: &str, body: &str) -> PageArtifact {
        PageArtifact {
            sanitized_name: name.to_string(),
            markdown_body: body.to_string(),
        }
    }

    #[test]
    fn test_write_page() {
        let dir = TempDir::new().unwrap();

        let path = write_page(dir.path(), &artifact("Home", "# Welcome\n\n[[INDEX.md]]")).unwrap();

        assert_eq!(path, dir.path().join("Home.md"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "# Welcome\n\n[[INDEX.md]]"
        );
    }

    #[test]
    fn test_unicode_content_round_trips() {
        let dir = TempDir::new().unwrap();
        let body = "Привет, мир! 你好 🌍";

        let path = write_page(dir.path(), &artifact("Приветствие", body)).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), body);
    }

    #[test]
    fn test_same_name_last_write_wins() {
        let dir = TempDir::new().unwrap();

        write_page(dir.path(), &artifact("Page", "first")).unwrap();
        let path = write_page(dir.path(), &artifact("Page", "second")).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let result = write_page(&missing, &artifact("Page", "body"));

        assert!(matches!(result, Err(OutputError::Io(_))));
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        ensure_output_dir(&nested).unwrap();
        ensure_output_dir(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
