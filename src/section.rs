//! Section location: which slice of the document an edit may touch.

use std::path::Path;

use crate::dialect::{is_header, Dialect};
use crate::error::CskvError;

/// The line range an edit is allowed to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRange {
    /// Non-INI dialect or no section requested: the entire document
    Whole,
    /// The requested section does not exist yet
    NotPresent,
    /// Lines `[start, end)` following the section header
    Span { start: usize, end: usize },
}

/// Find the line range owned by `section`.
///
/// For non-INI dialects, or when no section is requested, every line is
/// in range. Otherwise the section owns the lines after its header up
/// to the next header or the end of the document. A section name that
/// matches more than one header is a hard error, never silently
/// resolved to one of them.
pub fn locate(
    lines: &[String],
    dialect: Dialect,
    section: Option<&str>,
    path: &Path,
) -> Result<SectionRange, CskvError> {
    let section = match section {
        Some(name) if dialect == Dialect::Ini => name,
        _ => return Ok(SectionRange::Whole),
    };

    let header = format!("[{section}]");
    let matches: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(&header))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Ok(SectionRange::NotPresent),
        [idx] => {
            let start = idx + 1;
            let end = lines
                .iter()
                .enumerate()
                .skip(start)
                .find(|(_, line)| is_header(line))
                .map_or(lines.len(), |(i, _)| i);
            Ok(SectionRange::Span { start, end })
        }
        _ => Err(CskvError::DuplicateSection {
            path: path.to_path_buf(),
            section: section.to_string(),
            indexes: matches,
        }),
    }
}
