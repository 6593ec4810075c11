pub mod config;
pub mod dialect;
pub mod diff;
pub mod document;
pub mod editor;
pub mod error;
pub mod extra;
pub mod infer;
mod output;
pub mod section;

pub use config::{
    find_config_file, load_config, merge_defaults, CliDefaults, ConfigError, CskvToml, Defaults,
    DefaultsSection,
};
pub use dialect::{classify, Dialect};
pub use diff::{compare, DiffRow};
pub use document::Document;
pub use editor::{delete, insert, FormatOverrides};
pub use error::CskvError;
pub use extra::{parse_entries, read_extra_lines, Entry};
pub use infer::{infer_indent, infer_separator};
pub use output::{should_use_colors, Colors, OutputContext};
pub use section::{locate, SectionRange};

use std::path::PathBuf;

/// Where the extra/merge data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraSource {
    File(PathBuf),
    Stdin,
}

/// One fully-resolved invocation: which file, which edit, where the
/// output goes. Built once at the CLI boundary; the core never looks at
/// argv or calls `process::exit`.
#[derive(Debug, Default)]
pub struct Request {
    pub config_file: PathBuf,
    pub section: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
    /// Remove the key's line instead of setting it
    pub delete: bool,
    /// Compare against this file instead of editing
    pub compare: Option<PathBuf>,
    /// Print the result to stdout instead of writing the file
    pub dry_run: bool,
    /// With dry_run, print a unified diff instead of the full document
    pub show_diff: bool,
    /// With compare, include keys that are equal in both files
    pub verbose_compare: bool,
    pub extra: Option<ExtraSource>,
    pub overrides: FormatOverrides,
}

/// Main entry point: run one edit, delete, merge, or compare operation.
///
/// The whole file is read before any edit and written back in one go
/// after all edits; a failed operation never leaves a partial write.
pub fn run(request: &Request, ctx: &OutputContext) -> Result<(), CskvError> {
    let mut doc = Document::read(&request.config_file)?;
    ctx.info(&format!(
        "the file \"{}\" seems to have \"{}\" syntax",
        doc.path().display(),
        doc.dialect
    ));

    if let Some(target) = &request.compare {
        let other = Document::read(target)?;
        let rows = compare(&doc, &other, request.verbose_compare)?;
        output::print_compare(&rows);
        return Ok(());
    }

    let original = doc.render();

    if let Some(key) = &request.key {
        if request.delete {
            delete(&mut doc, request.section.as_deref(), key, ctx)?;
        } else {
            let value = request.value.as_deref().unwrap_or_default();
            insert(
                &mut doc,
                request.section.as_deref(),
                key,
                value,
                &request.overrides,
                ctx,
            )?;
        }
    }

    if let Some(source) = &request.extra {
        let path = match source {
            ExtraSource::File(path) => Some(path.as_path()),
            ExtraSource::Stdin => None,
        };
        let lines = read_extra_lines(path)?;
        let entries = parse_entries(lines, &doc)?;
        for entry in entries {
            insert(
                &mut doc,
                entry.section.as_deref(),
                &entry.key,
                &entry.value,
                &request.overrides,
                ctx,
            )?;
        }
    }

    if request.dry_run {
        if request.show_diff {
            let label = request.config_file.display().to_string();
            output::print_diff(&label, &original, &doc.render());
        } else {
            output::print_document(&doc);
        }
    } else {
        ctx.info(&format!(
            "printing output to file {}",
            request.config_file.display()
        ));
        doc.write_back()?;
    }

    Ok(())
}
