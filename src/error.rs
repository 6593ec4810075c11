//! Error types for cskv operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for config editing operations.
///
/// Every variant is fatal for the current operation: errors are detected
/// before any in-memory mutation is flushed, so a failed operation never
/// leaves a partially edited file on disk.
#[derive(Debug)]
pub enum CskvError {
    /// The config file path does not exist or could not be resolved
    NoConfigFile(PathBuf),
    /// IO error reading or writing a file
    Io(io::Error),
    /// Filename has an .ini extension but the content is not INI syntax
    FormatMismatch { path: PathBuf },
    /// More than one header line matches the requested section
    DuplicateSection {
        path: PathBuf,
        section: String,
        indexes: Vec<usize>,
    },
    /// An INI-dialect delete was requested without a section name
    MissingSection { key: String },
    /// Two inputs being merged or compared have different dialects
    DialectMismatch { expected: String, found: String },
}

impl fmt::Display for CskvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CskvError::NoConfigFile(path) => {
                write!(f, "no config file found at {}", path.display())
            }
            CskvError::Io(e) => write!(f, "file access failed: {e}"),
            CskvError::FormatMismatch { path } => write!(
                f,
                "{} has an \"ini\" extension, but the content does not look like INI syntax",
                path.display()
            ),
            CskvError::DuplicateSection {
                path,
                section,
                indexes,
            } => {
                let lines: Vec<String> = indexes.iter().map(|i| i.to_string()).collect();
                write!(
                    f,
                    "more than one [{section}] section found in {} at lines {}",
                    path.display(),
                    lines.join(", ")
                )
            }
            CskvError::MissingSection { key } => {
                write!(f, "deleting \"{key}\" from an INI file requires a section")
            }
            CskvError::DialectMismatch { expected, found } => {
                write!(
                    f,
                    "config file and extra data have different formats ({expected} vs {found})"
                )
            }
        }
    }
}

impl std::error::Error for CskvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CskvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CskvError {
    fn from(e: io::Error) -> Self {
        CskvError::Io(e)
    }
}
