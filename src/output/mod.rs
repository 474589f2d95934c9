//! Output module for persisting converted pages
//!
//! This module handles:
//! - Deriving filesystem-safe names from page titles
//! - Writing page files atomically into the output directory
//! - Generating the index file that cross-references every page

mod index;
mod sanitize;
mod writer;

pub use index::{build_index, format_index};
pub use sanitize::sanitize_filename;
pub use writer::{ensure_output_dir, write_page};

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Path does not exist or is not a directory: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to move output into place at {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes `content` to `path` so that readers see either the old file or the
/// complete new one, never a truncated write
///
/// The content goes to a temporary file in the target's directory, which is
/// then renamed over the target. On unix the file is created `0o644` (less
/// the umask) like any plainly written file, not owner-only.
pub(crate) fn write_atomic(path: &Path, content: &str) -> OutputResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder.tempfile_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;

    file.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
