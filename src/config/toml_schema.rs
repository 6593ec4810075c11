//! TOML schema definitions for cskv.toml

use serde::{Deserialize, Serialize};

/// Root structure for cskv.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CskvToml {
    /// Default formatting and output settings
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[defaults]` section in cskv.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Literal indentation for new lines (None = infer from the file)
    pub indent: Option<String>,

    /// Literal key/value separator (None = infer from the file)
    pub separator: Option<String>,

    /// Verbosity level 0-3 (default: 0)
    pub verbosity: Option<u8>,
}
