//! Optional `cskv.toml` support.
//!
//! This module provides:
//! - Loading defaults from `cskv.toml`
//! - Config file discovery (search upward, stopping at the git root)
//! - Merging CLI args, config file, and built-in defaults

mod file;
mod merge;
mod toml_schema;

pub use file::{find_config_file, find_file_upward, load_config, ConfigError};
pub use merge::{merge_defaults, CliDefaults, Defaults};
pub use toml_schema::{CskvToml, DefaultsSection};
