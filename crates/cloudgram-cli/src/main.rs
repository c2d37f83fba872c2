//! Cloudgram CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use cloudgram_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Cloudgram");
    debug!(args:?; "Parsed arguments");

    match cloudgram_cli::run(&args) {
        Ok(path) => {
            info!(path = path.display().to_string(); "Diagram written");
        }
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &ErrorAdapter(&err))
                .expect("Writing to String buffer is infallible");

            error!(diagram = args.name.as_str(); "Rendering failed\n{writer}");
            process::exit(1);
        }
    }
}
