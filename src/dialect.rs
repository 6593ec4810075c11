//! Format classification: decide whether a file is INI or one of the
//! raw key/value dialects before any edit is attempted.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::CskvError;

/// Structural dialect of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Bracketed `[section]` headers with key/value bodies
    Ini,
    /// Flat `key=value` lines
    RawEquals,
    /// Flat `key: value` lines
    RawColon,
    /// Flat `key value` lines
    RawSpace,
}

impl Dialect {
    /// Base key/value separator character for this dialect.
    pub fn separator(self) -> char {
        match self {
            Dialect::Ini | Dialect::RawEquals => '=',
            Dialect::RawColon => ':',
            Dialect::RawSpace => ' ',
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Ini => "ini",
            Dialect::RawEquals => "raw-equals",
            Dialect::RawColon => "raw-colon",
            Dialect::RawSpace => "raw-space",
        };
        write!(f, "{name}")
    }
}

/// Check whether a line is a `[section]` header.
pub fn is_header(line: &str) -> bool {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER
        .get_or_init(|| Regex::new(r"^\[.*\]").unwrap())
        .is_match(line)
}

fn has_ini_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ini") | Some("INI")
    )
}

/// Classify a line sequence into a [`Dialect`].
///
/// A running "ini score" counts header lines, and once a header has been
/// seen every further body line counts too; any score above 1 means two
/// or more structural lines exist and the document is INI. A file named
/// `*.ini` whose content fails that test is a [`CskvError::FormatMismatch`].
///
/// Non-INI content is classified by majority vote, each line landing in
/// exactly one bucket: `=` before `:` before space. Ties (and the
/// no-data case) resolve by that same priority order.
pub fn classify(lines: &[String], path: Option<&Path>) -> Result<Dialect, CskvError> {
    let mut ini_score = 0usize;
    for line in lines {
        let header = is_header(line);
        if header {
            ini_score += 1;
        }
        if ini_score > 0 && !header {
            ini_score += 1;
        }
    }

    if ini_score > 1 {
        return Ok(Dialect::Ini);
    }

    if let Some(path) = path {
        if has_ini_extension(path) {
            return Err(CskvError::FormatMismatch {
                path: path.to_path_buf(),
            });
        }
    }

    let mut equals = 0usize;
    let mut colon = 0usize;
    let mut space = 0usize;
    for line in lines {
        if line.contains('=') {
            equals += 1;
        } else if line.contains(':') {
            colon += 1;
        } else if line.contains(' ') {
            space += 1;
        }
    }

    // Priority order breaks ties: equals > colon > space
    if equals >= colon && equals >= space {
        Ok(Dialect::RawEquals)
    } else if colon >= space {
        Ok(Dialect::RawColon)
    } else {
        Ok(Dialect::RawSpace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ini_with_header_and_body() {
        let content = lines(&["[global]", "workgroup = WORKGROUP"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::Ini);
    }

    #[test]
    fn test_ini_two_headers_no_body() {
        let content = lines(&["[one]", "[two]"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::Ini);
    }

    #[test]
    fn test_single_header_alone_is_not_ini() {
        // One structural line is not enough evidence
        let content = lines(&["[global]"]);
        assert_ne!(classify(&content, None).unwrap(), Dialect::Ini);
    }

    #[test]
    fn test_raw_equals() {
        let content = lines(&["PasswordAuthentication=no", "UsePAM=yes"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawEquals);
    }

    #[test]
    fn test_raw_colon() {
        let content = lines(&["Port: 22", "PermitRootLogin: yes"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawColon);
    }

    #[test]
    fn test_raw_space() {
        let content = lines(&["Port 22", "PermitRootLogin yes"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawSpace);
    }

    #[test]
    fn test_majority_vote() {
        let content = lines(&["a=1", "b=2", "c: 3"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawEquals);
    }

    #[test]
    fn test_tie_prefers_equals_over_colon() {
        let content = lines(&["a=1", "b: 2"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawEquals);
    }

    #[test]
    fn test_tie_prefers_colon_over_space() {
        let content = lines(&["a: 1", "b 2"]);
        assert_eq!(classify(&content, None).unwrap(), Dialect::RawColon);
    }

    #[test]
    fn test_classification_is_order_independent() {
        let forward = lines(&["a=1", "b: 2", "c: 3", "d 4"]);
        let reversed: Vec<String> = forward.iter().rev().cloned().collect();
        assert_eq!(
            classify(&forward, None).unwrap(),
            classify(&reversed, None).unwrap()
        );
    }

    #[test]
    fn test_ini_extension_with_flat_content_fails() {
        let content = lines(&["a=1", "b=2"]);
        let path = PathBuf::from("settings.ini");
        let result = classify(&content, Some(&path));
        assert!(matches!(result, Err(CskvError::FormatMismatch { .. })));
    }

    #[test]
    fn test_ini_extension_with_ini_content_is_fine() {
        let content = lines(&["[main]", "a=1"]);
        let path = PathBuf::from("settings.ini");
        assert_eq!(classify(&content, Some(&path)).unwrap(), Dialect::Ini);
    }

    #[test]
    fn test_is_header() {
        assert!(is_header("[global]"));
        assert!(is_header("[a b c]"));
        assert!(!is_header("  [indented]"));
        assert!(!is_header("key=value"));
    }
}
