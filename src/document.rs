//! In-memory document: the ordered line sequence an edit operates on.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dialect::{classify, Dialect};
use crate::error::CskvError;

/// A config file held in memory as a list of lines.
///
/// Line terminators are stripped on read and restored (one `\n` per
/// line) on write. The dialect is classified once at construction and
/// holds for the lifetime of the operation.
#[derive(Debug, Clone)]
pub struct Document {
    pub lines: Vec<String>,
    pub dialect: Dialect,
    path: Option<PathBuf>,
}

impl Document {
    /// Read a file from disk, in full, before any edit.
    pub fn read(path: &Path) -> Result<Self, CskvError> {
        if !path.is_file() {
            return Err(CskvError::NoConfigFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let lines: Vec<String> = content.lines().map(|l| l.trim_end().to_string()).collect();
        let dialect = classify(&lines, Some(path))?;
        Ok(Self {
            lines,
            dialect,
            path: Some(path.to_path_buf()),
        })
    }

    /// Build a document from already-read lines (piped or extra data).
    /// No filename means no extension check during classification.
    pub fn from_lines(lines: Vec<String>) -> Result<Self, CskvError> {
        let dialect = classify(&lines, None)?;
        Ok(Self {
            lines,
            dialect,
            path: None,
        })
    }

    /// Path the document was read from, for error reporting.
    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or(Path::new("<stdin>"))
    }

    /// Render the document as file content, one newline per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Overwrite the origin file with the current line sequence.
    pub fn write_back(&self) -> Result<(), CskvError> {
        match &self.path {
            Some(path) => {
                fs::write(path, self.render())?;
                Ok(())
            }
            None => Err(CskvError::NoConfigFile(PathBuf::from("<stdin>"))),
        }
    }
}
