//! Error types for seqflow operations.
//!
//! This module provides the main error type [`SeqflowError`]. The
//! transformations themselves never fail; every error originates at a
//! boundary: the file system, the configuration, or an external tool.

use std::{fmt, io};

use thiserror::Error;

use crate::tool::ToolError;

/// Exit status reported when a collaborator executable cannot be found.
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Exit status for every other failure that carries no status of its own.
pub const EXIT_FAILURE: i32 = 1;

/// The pipeline step an external tool was invoked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Refreshing the sequence diagram.
    Generate,
    /// Rendering the activity diagram to images.
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Generate => write!(f, "generate"),
            Stage::Render => write!(f, "render"),
        }
    }
}

/// The main error type for seqflow operations.
#[derive(Debug, Error)]
pub enum SeqflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{stage} step failed: {source}")]
    Tool {
        stage: Stage,
        #[source]
        source: ToolError,
    },
}

impl SeqflowError {
    /// Create a `Tool` error for the given stage.
    pub fn tool(stage: Stage, source: ToolError) -> Self {
        Self::Tool { stage, source }
    }

    /// The process exit status this error should produce.
    ///
    /// A missing executable maps to [`EXIT_TOOL_NOT_FOUND`], a failed tool
    /// propagates its own status, and everything else maps to
    /// [`EXIT_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            SeqflowError::Tool {
                source: ToolError::NotFound { .. },
                ..
            } => EXIT_TOOL_NOT_FOUND,
            SeqflowError::Tool {
                source: ToolError::Failed {
                    status: Some(status),
                    ..
                },
                ..
            } if *status != 0 => *status,
            _ => EXIT_FAILURE,
        }
    }
}
