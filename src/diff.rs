//! Key/value comparison of two config documents.

use std::collections::{BTreeMap, BTreeSet};

use crate::dialect::{is_header, Dialect};
use crate::document::Document;
use crate::error::CskvError;

/// One display row of the comparison report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRow {
    /// Emitted lazily, right before a section's first key row
    Section(String),
    /// Key with the value from each file (empty when absent)
    Entry {
        key: String,
        left: String,
        right: String,
    },
}

type SectionMap = BTreeMap<Option<String>, BTreeMap<String, String>>;

/// Extract per-section key/value maps. Later definitions of the same
/// key overwrite earlier ones (last write wins, not an error).
fn extract(doc: &Document) -> SectionMap {
    let sep = doc.dialect.separator();
    let mut sections: SectionMap = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in &doc.lines {
        let sline = line.trim();
        if doc.dialect == Dialect::Ini && is_header(sline) {
            current = Some(sline.trim_matches(['[', ']']).to_string());
            continue;
        }
        if sline.is_empty() || sline.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = sline.split_once(sep) {
            sections
                .entry(current.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    sections
}

/// Compare two documents key by key, section by section.
///
/// Sections are the sorted union of both files' section names (the
/// unnamed pre-header span sorts first); keys are the sorted union per
/// section. By default only differing keys produce rows; `verbose`
/// includes the equal ones too. Section headers appear only when the
/// section contributes at least one row.
pub fn compare(a: &Document, b: &Document, verbose: bool) -> Result<Vec<DiffRow>, CskvError> {
    if a.dialect != b.dialect {
        return Err(CskvError::DialectMismatch {
            expected: a.dialect.to_string(),
            found: b.dialect.to_string(),
        });
    }

    let map_a = extract(a);
    let map_b = extract(b);

    let sections: BTreeSet<Option<String>> =
        map_a.keys().chain(map_b.keys()).cloned().collect();

    let empty = BTreeMap::new();
    let mut rows = Vec::new();

    for section in sections {
        let in_a = map_a.get(&section).unwrap_or(&empty);
        let in_b = map_b.get(&section).unwrap_or(&empty);
        let keys: BTreeSet<&String> = in_a.keys().chain(in_b.keys()).collect();

        let mut header_emitted = false;
        for key in keys {
            let left = in_a.get(key).cloned().unwrap_or_default();
            let right = in_b.get(key).cloned().unwrap_or_default();
            if left == right && !verbose {
                continue;
            }
            if !header_emitted {
                if let Some(name) = &section {
                    rows.push(DiffRow::Section(name.clone()));
                }
                header_emitted = true;
            }
            rows.push(DiffRow::Entry {
                key: key.clone(),
                left,
                right,
            });
        }
    }

    Ok(rows)
}
