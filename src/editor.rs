//! Line editing: find-or-create the line for a key inside its section
//! and rewrite it, preserving the file's own formatting conventions.

use crate::dialect::Dialect;
use crate::document::Document;
use crate::error::CskvError;
use crate::infer::{infer_indent, infer_separator};
use crate::output::OutputContext;
use crate::section::{locate, SectionRange};

/// Explicit formatting choices from the caller. `None` means infer from
/// the document.
#[derive(Debug, Default, Clone)]
pub struct FormatOverrides {
    pub indent: Option<String>,
    pub separator: Option<String>,
}

fn resolve_format(
    doc: &Document,
    overrides: &FormatOverrides,
    ctx: &OutputContext,
) -> (String, String) {
    let indent = match &overrides.indent {
        Some(indent) => indent.clone(),
        None => {
            let indent = infer_indent(&doc.lines);
            ctx.info(&format!(
                "detected an indentation of {} blanks",
                indent.len()
            ));
            indent
        }
    };
    let separator = match &overrides.separator {
        Some(sep) => sep.clone(),
        None => {
            let sep = infer_separator(&doc.lines, doc.dialect);
            ctx.info(&format!("the separator is |KEY\"{sep}\"VALUE|"));
            sep
        }
    };
    (indent, separator)
}

/// Set `key` to `value` inside `section` (or the whole file for raw
/// dialects), creating the section or the line as needed.
///
/// Matching is comment-aware: the first active line starting with the
/// key is overwritten in place; later active duplicates are commented
/// out with a `# ` prefix rather than removed, so exactly one active
/// definition remains and the history stays visible. A commented-out
/// line for the key is uncommented and overwritten when no active line
/// precedes it. When nothing matches, the new line lands right after
/// the last non-blank line of the section.
pub fn insert(
    doc: &mut Document,
    section: Option<&str>,
    key: &str,
    value: &str,
    overrides: &FormatOverrides,
    ctx: &OutputContext,
) -> Result<(), CskvError> {
    let (indent, sep) = resolve_format(doc, overrides, ctx);

    if doc.dialect != Dialect::Ini {
        if let Some(name) = section {
            ctx.warn(&format!(
                "[{name}] given, but {} does not have INI format",
                doc.path().display()
            ));
        }
    }

    let (start, end) = match locate(&doc.lines, doc.dialect, section, doc.path())? {
        SectionRange::Whole => (0, doc.lines.len()),
        SectionRange::Span { start, end } => (start, end),
        SectionRange::NotPresent => {
            // NotPresent only comes back for INI with a section name
            let name = section.unwrap_or_default();
            ctx.warn(&format!("section [{name}] missing, creating it"));
            doc.lines.push(format!("[{name}]"));
            (doc.lines.len(), doc.lines.len())
        }
    };

    if start < end {
        ctx.info(&format!(
            "the entry will be parsed between lines {start} and {end}"
        ));
    }

    let new_line = format!("{indent}{key}{sep}{value}");
    let kstr = key.trim();
    let mut matched = false;

    for i in start..end {
        let lstr = doc.lines[i].trim().to_string();

        if lstr.starts_with(kstr) {
            if !matched {
                doc.lines[i] = new_line.clone();
                matched = true;
            } else {
                // Duplicate active definition: keep it as a comment
                let commented = format!("# {}", doc.lines[i]);
                doc.lines[i] = commented;
            }
        } else if lstr.starts_with('#') {
            let bare = lstr.trim_matches('#').trim();
            let is_candidate = bare.starts_with(&format!("{kstr} "))
                || bare.starts_with(&format!("{kstr}{sep}"));
            if is_candidate && !matched {
                doc.lines[i] = new_line.clone();
                matched = true;
            }
        }
    }

    if !matched {
        // Insert after the last non-blank line; trailing blanks are
        // skipped, not deleted.
        let mut at = end;
        while at > start && doc.lines[at - 1].trim().is_empty() {
            at -= 1;
        }
        doc.lines.insert(at, new_line);
    }

    Ok(())
}

/// Remove every active line for `key` inside the resolved range.
///
/// INI dialect requires a section name. Commented-out matches are left
/// alone; delete only touches live definitions.
pub fn delete(
    doc: &mut Document,
    section: Option<&str>,
    key: &str,
    ctx: &OutputContext,
) -> Result<(), CskvError> {
    if doc.dialect == Dialect::Ini && section.is_none() {
        return Err(CskvError::MissingSection {
            key: key.to_string(),
        });
    }

    let (start, mut end) = match locate(&doc.lines, doc.dialect, section, doc.path())? {
        SectionRange::Whole => (0, doc.lines.len()),
        SectionRange::Span { start, end } => (start, end),
        SectionRange::NotPresent => {
            let name = section.unwrap_or_default();
            ctx.warn(&format!("section [{name}] missing, nothing to delete"));
            return Ok(());
        }
    };

    let kstr = key.trim();
    let mut removed = 0usize;
    let mut i = start;
    while i < end {
        let lstr = doc.lines[i].trim();
        if !lstr.is_empty() && lstr.starts_with(kstr) {
            doc.lines.remove(i);
            end -= 1;
            removed += 1;
        } else {
            i += 1;
        }
    }

    if removed == 0 {
        ctx.warn(&format!("key \"{key}\" not found, nothing to delete"));
    } else {
        ctx.info(&format!("removed {removed} line(s) for \"{key}\""));
    }

    Ok(())
}
