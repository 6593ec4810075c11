//! Configuration merging logic
//!
//! Priority: CLI args > cskv.toml > built-in defaults

use super::toml_schema::DefaultsSection;

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly
/// set".
#[derive(Debug, Default)]
pub struct CliDefaults {
    pub indent: Option<String>,
    pub separator: Option<String>,
    pub verbosity: Option<u8>,
}

/// Resolved defaults for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// None means infer the indent from the file
    pub indent: Option<String>,
    /// None means infer the separator from the file
    pub separator: Option<String>,
    pub verbosity: u8,
}

/// Merge settings from CLI, TOML, and built-in defaults.
///
/// Priority: CLI > TOML > defaults. Indent and separator stay `None`
/// when neither source sets them, which means "infer from the file".
pub fn merge_defaults(cli: &CliDefaults, toml: Option<&DefaultsSection>) -> Defaults {
    Defaults {
        indent: cli
            .indent
            .clone()
            .or_else(|| toml.and_then(|t| t.indent.clone())),
        separator: cli
            .separator
            .clone()
            .or_else(|| toml.and_then(|t| t.separator.clone())),
        verbosity: cli
            .verbosity
            .or_else(|| toml.and_then(|t| t.verbosity))
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let cli = CliDefaults::default();
        let defaults = merge_defaults(&cli, None);

        assert_eq!(defaults.indent, None);
        assert_eq!(defaults.separator, None);
        assert_eq!(defaults.verbosity, 0);
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let cli = CliDefaults::default();
        let toml = DefaultsSection {
            indent: Some("  ".to_string()),
            separator: None,
            verbosity: Some(2),
        };

        let defaults = merge_defaults(&cli, Some(&toml));

        assert_eq!(defaults.indent, Some("  ".to_string()));
        assert_eq!(defaults.separator, None);
        assert_eq!(defaults.verbosity, 2);
    }

    #[test]
    fn test_merge_cli_overrides_toml() {
        let cli = CliDefaults {
            indent: Some("\t".to_string()),
            separator: Some("=".to_string()),
            verbosity: Some(3),
        };
        let toml = DefaultsSection {
            indent: Some("  ".to_string()),
            separator: Some(" = ".to_string()),
            verbosity: Some(1),
        };

        let defaults = merge_defaults(&cli, Some(&toml));

        assert_eq!(defaults.indent, Some("\t".to_string()));
        assert_eq!(defaults.separator, Some("=".to_string()));
        assert_eq!(defaults.verbosity, 3);
    }

    #[test]
    fn test_merge_mixed_sources() {
        let cli = CliDefaults {
            indent: None,
            separator: Some(": ".to_string()),
            verbosity: None,
        };
        let toml = DefaultsSection {
            indent: Some("  ".to_string()),
            separator: None,
            verbosity: Some(1),
        };

        let defaults = merge_defaults(&cli, Some(&toml));

        assert_eq!(defaults.indent, Some("  ".to_string())); // TOML
        assert_eq!(defaults.separator, Some(": ".to_string())); // CLI
        assert_eq!(defaults.verbosity, 1); // TOML
    }
}
