use std::process::ExitCode;

use bbcheck::app;
use bbcheck::args::Args;
use bbcheck::config::Config;
use bbcheck::logging;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(config.verbosity) {
        eprintln!("Logging Error: {e:#}");
    }

    match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
