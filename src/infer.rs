//! Indentation and separator inference.
//!
//! Both are majority votes over the file's own eligible lines, so an
//! edit blends in with whatever convention the file already uses. The
//! results are advisory: an explicit indent or separator from the
//! caller always wins.

use std::collections::BTreeMap;

use crate::dialect::{is_header, Dialect};

const MIN_ELIGIBLE_LEN: usize = 4;

fn eligible(line: &str) -> bool {
    !is_header(line) && line.len() >= MIN_ELIGIBLE_LEN
}

/// Most frequent value; ties resolve to the smallest value so the
/// result never depends on input order.
fn modal(values: &[usize]) -> Option<usize> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(v, _)| v)
}

fn leading_spaces(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

fn trailing_spaces(s: &str) -> usize {
    s.len() - s.trim_end().len()
}

/// Infer the prevailing indentation of non-header lines, rendered as a
/// run of spaces. Falls back to no indent when the file has no eligible
/// lines to vote with.
pub fn infer_indent(lines: &[String]) -> String {
    let widths: Vec<usize> = lines
        .iter()
        .filter(|l| eligible(l))
        .map(|l| leading_spaces(l))
        .collect();

    match modal(&widths) {
        Some(width) => " ".repeat(width),
        None => String::new(),
    }
}

/// Infer the prevailing key/value separator, padding included.
///
/// Each eligible line is split at the first base separator character;
/// the modal trailing-space width of the key side and the modal
/// leading-space width of the value side are taken independently.
/// A line without the separator votes `(0, 0)`. With no eligible lines
/// the result is the bare separator.
pub fn infer_separator(lines: &[String], dialect: Dialect) -> String {
    let base = dialect.separator();
    let mut left_pads = Vec::new();
    let mut right_pads = Vec::new();

    for line in lines.iter().filter(|l| eligible(l)) {
        match line.split_once(base) {
            Some((left, right)) => {
                left_pads.push(trailing_spaces(left));
                right_pads.push(leading_spaces(right));
            }
            None => {
                left_pads.push(trailing_spaces(line));
                right_pads.push(0);
            }
        }
    }

    let left = modal(&left_pads).unwrap_or(0);
    let right = modal(&right_pads).unwrap_or(0);
    format!("{}{}{}", " ".repeat(left), base, " ".repeat(right))
}
