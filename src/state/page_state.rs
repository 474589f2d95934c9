/// Page outcome definitions
///
/// Every page handed to the coordinator ends in exactly one of these outcomes.
use std::fmt;
use std::path::PathBuf;

/// Terminal result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    // ===== Success =====
    /// Markdown was written to the given file
    Written(PathBuf),

    // ===== Skips =====
    /// Fetch returned a non-success status or failed to connect
    Unavailable,

    /// Page converted to nothing but whitespace; no file was created
    Empty,

    /// Markdown conversion of the page failed
    ConversionFailed(String),

    // ===== Errors =====
    /// The page file could not be written
    WriteFailed(String),
}

impl PageOutcome {
    /// Returns true for outcomes that are logged and absorbed
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::Unavailable | Self::Empty | Self::ConversionFailed(_)
        )
    }

    /// Returns true for outcomes the caller must hear about
    pub fn is_error(&self) -> bool {
        matches!(self, Self::WriteFailed(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written(_) => "written",
            Self::Unavailable => "unavailable",
            Self::Empty => "empty",
            Self::ConversionFailed(_) => "conversion_failed",
            Self::WriteFailed(_) => "write_failed",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written(path) => write!(f, "written to {}", path.display()),
            Self::WriteFailed(reason) => write!(f, "write failed: {}", reason),
            Self::ConversionFailed(reason) => write!(f, "conversion failed: {}", reason),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
