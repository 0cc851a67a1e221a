//! Command-line argument definitions for the seqflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the diagram to produce, the
//! configuration file, which external steps run, and logging verbosity.

use clap::{Parser, Subcommand};

use seqflow::DiagramKind;

/// Generate PlantUML activity diagrams from a clang-uml sequence diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram to generate
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Use the existing sequence diagram instead of running the generator
    #[arg(long, global = true)]
    pub skip_generate: bool,

    /// Write the activity diagram without rendering images
    #[arg(long, global = true)]
    pub skip_render: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// The diagram to generate.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activity diagram mirroring every message, branch and loop
    Flow,
    /// Short overview of the main initialization and loop steps
    Overview,
}

impl From<Command> for DiagramKind {
    fn from(command: Command) -> Self {
        match command {
            Command::Flow => DiagramKind::Flow,
            Command::Overview => DiagramKind::Overview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flow_defaults() {
        let args = Args::try_parse_from(["seqflow", "flow"]).expect("args parse");
        assert_eq!(args.command, Command::Flow);
        assert_eq!(args.config, None);
        assert!(!args.skip_generate);
        assert!(!args.skip_render);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_overview_with_flags() {
        let args = Args::try_parse_from([
            "seqflow",
            "overview",
            "--config",
            "seqflow.toml",
            "--skip-generate",
            "--skip-render",
            "--log-level",
            "debug",
        ])
        .expect("args parse");
        assert_eq!(DiagramKind::from(args.command), DiagramKind::Overview);
        assert_eq!(args.config.as_deref(), Some("seqflow.toml"));
        assert!(args.skip_generate);
        assert!(args.skip_render);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["seqflow"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
