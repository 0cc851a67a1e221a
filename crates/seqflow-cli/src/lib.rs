//! CLI logic for the seqflow tool.
//!
//! This module contains the core CLI logic: loading configuration and
//! running the diagram pipeline for the requested subcommand.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use log::info;

use seqflow::{
    DiagramKind, SeqflowError,
    pipeline::{Pipeline, PipelineOptions, PipelineReport},
};

/// Run the seqflow CLI application
///
/// This function loads the configuration, then generates, transforms and
/// renders the diagram selected by the subcommand.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SeqflowError` for:
/// - Configuration loading errors
/// - File I/O errors
/// - A missing or failing generator or renderer
pub fn run(args: &Args) -> Result<PipelineReport, SeqflowError> {
    let kind = DiagramKind::from(args.command);
    info!(kind:% = kind; "Generating activity diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let options = PipelineOptions {
        skip_generate: args.skip_generate,
        skip_render: args.skip_render,
    };

    let report = Pipeline::new(app_config).run(kind, options)?;

    info!(artifacts = report.rendered().len() + 1; "Pipeline finished");

    Ok(report)
}
