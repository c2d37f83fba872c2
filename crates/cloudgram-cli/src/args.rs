//! Command-line argument definitions for the Cloudgram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the diagram name, output location,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Cloudgram diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram name, also used to derive the output file name
    #[arg(short, long, default_value = "My new diagram")]
    pub name: String,

    /// Directory receiving the SVG file (overrides the configuration file)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request interactive display of the finished diagram
    #[arg(long)]
    pub show: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
