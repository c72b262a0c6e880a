//! loglex CLI
//!
//! Reads a log stream and prints each line with the patterns it matched.

use std::io::{self, BufWriter};

use loglex::{open_input, parse_args, Command, Printer, USAGE};

fn main() {
    loglex::init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let input = match open_input(&config.input) {
        Ok(input) => input,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let mut printer = Printer::new(BufWriter::new(io::stdout().lock()), &config);
    let result = loglex::run(input, &config, &mut printer);
    // Lines already accepted are printed even when the run failed.
    let flushed = printer.finish();

    match result {
        Ok(summary) => {
            tracing::debug!(?summary, "finished");
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = flushed {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("error: failed to write output: {e}");
            std::process::exit(1);
        }
    }
}
