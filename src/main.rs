use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cskv::{
    find_config_file, load_config, merge_defaults, should_use_colors, CliDefaults, CskvToml,
    ExtraSource, FormatOverrides, OutputContext, Request,
};

#[derive(Parser)]
#[command(name = "cskv")]
#[command(version, about = "A non-interactive key/value editor for INI and raw config files")]
struct Cli {
    /// Configuration file name or path to it
    config_file: PathBuf,

    /// Section (for INI type files)
    #[arg(short, long)]
    section: Option<String>,

    /// Key/variable name
    #[arg(short, long)]
    key: Option<String>,

    /// Value for the given key
    #[arg(short, long, requires = "key")]
    value: Option<String>,

    /// "quoted" spaces or tabs for line indentation (default: the most
    /// common indentation in the file)
    #[arg(short, long)]
    indent: Option<String>,

    /// Separator between key and value (default: the most common
    /// separator in the file, padding included)
    #[arg(long)]
    sep: Option<String>,

    /// Delete the key's line instead of setting it
    #[arg(short, long, requires = "key", conflicts_with = "value")]
    delete: bool,

    /// Compare against a second config file instead of editing
    #[arg(short, long, value_name = "PATH")]
    compare: Option<PathBuf>,

    /// Print output to stdout instead of the file
    #[arg(short = 't', long = "test")]
    test: bool,

    /// With --test, show the changes as a unified diff
    #[arg(long, requires = "test")]
    diff: bool,

    /// With --compare, also list keys that are equal in both files
    #[arg(long, requires = "compare")]
    verbose: bool,

    /// Parse extra values from PATH, or from stdin when no PATH follows
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    extra: Option<Option<PathBuf>>,

    /// Verbosity level: 0 nothing, 1 errors, 2 warnings, 3 info
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    verbosity: Option<u8>,

    /// Specify cskv.toml path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let toml_config = load_configuration(&cli.config);

    let cli_defaults = CliDefaults {
        indent: cli.indent.clone(),
        separator: cli.sep.clone(),
        verbosity: cli.verbosity,
    };
    let defaults = merge_defaults(&cli_defaults, toml_config.as_ref().map(|c| &c.defaults));

    let ctx = OutputContext::new(defaults.verbosity, should_use_colors());

    let request = Request {
        config_file: cli.config_file,
        section: cli.section,
        key: cli.key,
        value: cli.value,
        delete: cli.delete,
        compare: cli.compare,
        dry_run: cli.test,
        show_diff: cli.diff,
        verbose_compare: cli.verbose,
        extra: cli.extra.map(|source| match source {
            Some(path) => ExtraSource::File(path),
            None => ExtraSource::Stdin,
        }),
        overrides: FormatOverrides {
            indent: defaults.indent,
            separator: defaults.separator,
        },
    };

    match cskv::run(&request, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ctx.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>) -> Option<CskvToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}
