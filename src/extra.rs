//! Extra/merge input: a block of additional key/value text, read from a
//! secondary file or a pipe, flattened into ordered entries.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use crate::dialect::{is_header, Dialect};
use crate::document::Document;
use crate::error::CskvError;

/// One edit to apply: section (INI only), key, value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub section: Option<String>,
    pub key: String,
    pub value: String,
}

/// Read extra lines from a file path, or from stdin when no path is
/// given. Blank lines are dropped and the rest is trimmed, matching how
/// piped input arrives.
pub fn read_extra_lines(source: Option<&Path>) -> io::Result<Vec<String>> {
    let raw = match source {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut lines = Vec::new();
            for line in io::stdin().lock().lines() {
                lines.push(line?);
            }
            lines.join("\n")
        }
    };
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// Parse extra lines into ordered entries, enforcing that they share
/// the host document's dialect.
///
/// INI input carries a running current-section; raw input produces
/// entries with no section. Comments are skipped. The entries come back
/// in input order so repeated inserts replay the block faithfully.
pub fn parse_entries(lines: Vec<String>, host: &Document) -> Result<Vec<Entry>, CskvError> {
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let extra = Document::from_lines(lines)?;
    if extra.dialect != host.dialect {
        return Err(CskvError::DialectMismatch {
            expected: host.dialect.to_string(),
            found: extra.dialect.to_string(),
        });
    }

    let sep = extra.dialect.separator();
    let mut entries = Vec::new();
    let mut current_section: Option<String> = None;

    for line in &extra.lines {
        let sline = line.trim();
        if extra.dialect == Dialect::Ini && is_header(sline) {
            current_section = Some(sline.trim_matches(['[', ']']).to_string());
            continue;
        }
        if sline.is_empty() || sline.starts_with('#') {
            continue;
        }
        let (key, value) = match sline.split_once(sep) {
            Some((k, v)) => (k.trim().to_string(), v.trim().to_string()),
            None => (sline.to_string(), String::new()),
        };
        entries.push(Entry {
            section: if extra.dialect == Dialect::Ini {
                current_section.clone()
            } else {
                None
            },
            key,
            value,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn host(raw: &[&str]) -> Document {
        Document::from_lines(lines(raw)).unwrap()
    }

    #[test]
    fn test_ini_entries_track_sections() {
        let host = host(&["[main]", "a = 1"]);
        let extra = lines(&["[main]", "b = 2", "[other]", "c = 3"]);
        let entries = parse_entries(extra, &host).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry {
                    section: Some("main".to_string()),
                    key: "b".to_string(),
                    value: "2".to_string(),
                },
                Entry {
                    section: Some("other".to_string()),
                    key: "c".to_string(),
                    value: "3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_raw_entries_have_no_section() {
        let host = host(&["a=1", "b=2"]);
        let extra = lines(&["c=3", "d=4"]);
        let entries = parse_entries(extra, &host).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.section.is_none()));
        assert_eq!(entries[0].key, "c");
        assert_eq!(entries[1].value, "4");
    }

    #[test]
    fn test_comments_skipped() {
        let host = host(&["a=1", "b=2"]);
        let extra = lines(&["# note", "c=3"]);
        let entries = parse_entries(extra, &host).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "c");
    }

    #[test]
    fn test_dialect_mismatch_is_fatal() {
        let host = host(&["a=1", "b=2"]);
        let extra = lines(&["c: 3", "d: 4"]);
        let result = parse_entries(extra, &host);
        assert!(matches!(result, Err(CskvError::DialectMismatch { .. })));
    }

    #[test]
    fn test_empty_extra_is_fine() {
        let host = host(&["a=1", "b=2"]);
        let entries = parse_entries(Vec::new(), &host).unwrap();
        assert!(entries.is_empty());
    }
}
