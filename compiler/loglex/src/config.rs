//! Command-line configuration.
//!
//! Arguments are parsed by hand: every option is a flag or `--name=value`,
//! and at most one positional argument names the input.

use std::path::PathBuf;

use loglex_parse::IllegalPolicy;

pub const USAGE: &str = "\
Usage: loglex [OPTIONS] [PATH]

Tokenize a log file (or stdin when PATH is omitted or `-`) and report the
lines that match a known shape.

Options:
  --format=<fmt>    Output format: text, debug, json (default: text)
  --skip-illegal    Drop unrecognized characters instead of stopping
  --matched-only    Print only lines that matched a pattern
  -h, --help        Show this help

Logging:
  RUST_LOG=<filter>       Enable diagnostics on stderr (e.g. RUST_LOG=debug)
  LOGLEX_LOG_TREE=1       Render diagnostics as an indented tree";

/// Where to read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    Path(PathBuf),
}

/// How each line is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `N: literals` plus matched pattern names.
    #[default]
    Text,
    /// Like `Text`, with `<kind>: literal` for every token.
    Debug,
    /// One JSON object per line.
    Json,
}

impl Format {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Format::Text),
            "debug" => Some(Format::Debug),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub input: Input,
    pub format: Format,
    pub on_illegal: IllegalPolicy,
    pub matched_only: bool,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown format '{0}' (expected text, debug or json)")]
    UnknownFormat(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}': only one input path is accepted")]
    ExtraArgument(String),
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut config = CliConfig::default();
    let mut path: Option<String> = None;

    for arg in args {
        let arg: String = arg.into();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(name) = arg.strip_prefix("--format=") {
            config.format =
                Format::parse(name).ok_or_else(|| ConfigError::UnknownFormat(name.to_string()))?;
        } else if arg == "--skip-illegal" {
            config.on_illegal = IllegalPolicy::Skip;
        } else if arg == "--matched-only" {
            config.matched_only = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ConfigError::UnknownOption(arg));
        } else if path.is_some() {
            return Err(ConfigError::ExtraArgument(arg));
        } else {
            path = Some(arg);
        }
    }

    config.input = match path {
        None => Input::Stdin,
        Some(p) if p == "-" => Input::Stdin,
        Some(p) => Input::Path(PathBuf::from(p)),
    };
    Ok(Command::Run(config))
}
