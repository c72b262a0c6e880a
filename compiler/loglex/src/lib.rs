//! loglex command-line front end.
//!
//! Wires the core crates to the process: argument parsing ([`config`]),
//! opening the input ([`input`]), printing ([`output`]) and diagnostics
//! setup ([`init_tracing`]).

pub mod config;
pub mod input;
pub mod output;

use std::io::BufRead;
use std::sync::Once;

use loglex_parse::{LineSink, ParseError, ParseOptions, Parser, RunSummary};
use loglex_patterns::builtin_catalog;

pub use config::{parse_args, CliConfig, Command, ConfigError, Format, Input, USAGE};
pub use input::open_input;
pub use output::Printer;

static TRACING_INIT: Once = Once::new();

/// Install the diagnostics subscriber.
///
/// Does nothing unless `RUST_LOG` is set. With `LOGLEX_LOG_TREE` also set,
/// spans and events are rendered as an indented tree. Output goes to stderr
/// so it never mixes with printed lines. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("LOGLEX_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Classify every line of `input` against the built-in catalog.
pub fn run<R, S>(input: R, config: &CliConfig, sink: &mut S) -> Result<RunSummary, ParseError>
where
    R: BufRead,
    S: LineSink<'static> + ?Sized,
{
    let options = ParseOptions::default().on_illegal(config.on_illegal);
    Parser::with_options(input, builtin_catalog(), options).run(sink)
}
