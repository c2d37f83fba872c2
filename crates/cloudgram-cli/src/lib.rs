//! CLI logic for the Cloudgram diagram tool.
//!
//! This module contains the core CLI logic: it loads the configuration,
//! builds the demonstration topology and renders it to an SVG file.

pub mod error_adapter;
pub mod topology;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use cloudgram::{CloudgramError, DiagramManager, backend::svg::SvgBackend};

/// Run the Cloudgram CLI application
///
/// Returns the path of the written SVG file.
///
/// # Errors
///
/// Returns `CloudgramError` for:
/// - Configuration loading errors
/// - Node building errors
/// - Dangling relationships
/// - Rendering and file I/O errors
pub fn run(args: &Args) -> Result<PathBuf, CloudgramError> {
    info!(diagram = args.name; "Processing diagram");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(output_dir) = &args.output_dir {
        app_config.output_mut().set_directory(output_dir);
    }
    if args.show {
        app_config.output_mut().set_show(true);
    }

    let tree = topology::demo_tree()?;

    let backend = SvgBackend::from_config(&app_config)?;
    let mut manager = DiagramManager::new(backend).with_show(app_config.output().show());
    manager.render(&args.name, &tree)?;

    let output_file = manager
        .backend()
        .written()
        .last()
        .cloned()
        .ok_or_else(|| CloudgramError::Config("no diagram file was written".to_string()))?;

    info!(output_file = output_file.display().to_string(); "SVG exported successfully");

    Ok(output_file)
}
