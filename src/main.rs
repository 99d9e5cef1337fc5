use std::io::{self, stdout};
use std::process::ExitCode;

use clap::Parser;
use html_match::cli::{run, CliOptions};
use tracing_subscriber::EnvFilter;

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let options = CliOptions::parse();
    init_logging(options.log_filter());

    match run(&options, &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
