//! Verbosity-gated messaging and report printing.
//!
//! Diagnostics go to stderr behind a 0-3 verbosity ladder (0 silent,
//! 1 errors, 2 warnings, 3 info); reports and dry-run output go to
//! stdout so they stay pipeable.

use std::io::{self, IsTerminal};

use similar::{ChangeTag, TextDiff};

use crate::diff::DiffRow;
use crate::document::Document;

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy)]
pub struct Colors {
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                error: "\x1b[31m",   // Red
                warning: "\x1b[33m", // Yellow
                info: "\x1b[36m",    // Cyan
                enabled: true,
            }
        } else {
            Self {
                error: "",
                warning: "",
                info: "",
                enabled: false,
            }
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stderr().is_terminal()
}

/// Shared output state for one invocation.
pub struct OutputContext {
    pub verbosity: u8,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(verbosity: u8, use_colors: bool) -> Self {
        Self {
            verbosity,
            colors: Colors::new(use_colors),
        }
    }

    /// Printed at verbosity >= 1.
    pub fn error(&self, msg: &str) {
        if self.verbosity >= 1 {
            eprintln!("{}Error:{} {msg}", self.colors.error, self.colors.reset());
        }
    }

    /// Printed at verbosity >= 2.
    pub fn warn(&self, msg: &str) {
        if self.verbosity >= 2 {
            eprintln!(
                "{}Warning:{} {msg}",
                self.colors.warning,
                self.colors.reset()
            );
        }
    }

    /// Printed at verbosity >= 3.
    pub fn info(&self, msg: &str) {
        if self.verbosity >= 3 {
            eprintln!("{}{msg}{}", self.colors.info, self.colors.reset());
        }
    }
}

/// Print the whole mutated document to stdout (dry-run mode).
pub fn print_document(doc: &Document) {
    print!("{}", doc.render());
}

/// Print a unified diff between the original and edited content.
pub fn print_diff(label: &str, original: &str, edited: &str) {
    let diff = TextDiff::from_lines(original, edited);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
            }
        }
    }
}

/// Print the differ's report: lazy section headers, one row per key.
pub fn print_compare(rows: &[DiffRow]) {
    for row in rows {
        match row {
            DiffRow::Section(name) => println!("[{name}]"),
            DiffRow::Entry { key, left, right } => {
                println!("{key}: {left} | {right}");
            }
        }
    }
}
