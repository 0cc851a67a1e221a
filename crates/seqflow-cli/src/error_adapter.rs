//! Error adapter for converting SeqflowError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use seqflow::{SeqflowError, Stage, tool::ToolError};

/// Adapter giving a [`SeqflowError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a SeqflowError);

impl ErrorAdapter<'_> {
    fn help_text(&self) -> Option<String> {
        match self.0 {
            SeqflowError::Tool {
                stage,
                source: ToolError::NotFound { program },
            } => Some(match stage {
                Stage::Generate => format!("install `{program}` and make sure it is on PATH"),
                Stage::Render => format!(
                    "the activity diagram was written; install `{program}` to render it, \
                     or pass --skip-render"
                ),
            }),
            SeqflowError::Tool {
                stage: Stage::Generate,
                source: ToolError::Failed { .. },
            } => Some(
                "check the generator output above, or pass --skip-generate to reuse the \
                 existing sequence diagram"
                    .to_string(),
            ),
            SeqflowError::Config(_) => {
                Some("see the [project], [generator] and [renderer] sections".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            SeqflowError::Io(_) => "seqflow::io",
            SeqflowError::Config(_) => "seqflow::config",
            SeqflowError::Tool {
                source: ToolError::NotFound { .. },
                ..
            } => "seqflow::tool_not_found",
            SeqflowError::Tool {
                source: ToolError::Failed { .. },
                ..
            } => "seqflow::tool_failed",
            SeqflowError::Tool {
                source: ToolError::Launch { .. },
                ..
            } => "seqflow::tool_launch",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`SeqflowError`] for rendering by miette.
pub fn to_reportable(err: &SeqflowError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code_of(err: &SeqflowError) -> String {
        to_reportable(err)
            .code()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    fn help_of(err: &SeqflowError) -> Option<String> {
        to_reportable(err).help().map(|h| h.to_string())
    }

    #[test]
    fn test_codes() {
        let io = SeqflowError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(code_of(&io), "seqflow::io");

        let config = SeqflowError::Config("bad".into());
        assert_eq!(code_of(&config), "seqflow::config");

        let missing = SeqflowError::tool(
            Stage::Generate,
            ToolError::NotFound {
                program: "clang-uml".into(),
            },
        );
        assert_eq!(code_of(&missing), "seqflow::tool_not_found");

        let failed = SeqflowError::tool(
            Stage::Render,
            ToolError::Failed {
                program: "plantuml".into(),
                status: Some(1),
            },
        );
        assert_eq!(code_of(&failed), "seqflow::tool_failed");
    }

    #[test]
    fn test_missing_renderer_help_mentions_skip_render() {
        let err = SeqflowError::tool(
            Stage::Render,
            ToolError::NotFound {
                program: "plantuml".into(),
            },
        );
        let help = help_of(&err).expect("help present");
        assert!(help.contains("plantuml"));
        assert!(help.contains("--skip-render"));
    }

    #[test]
    fn test_display_matches_error() {
        let err = SeqflowError::Config("broken".into());
        assert_eq!(
            to_reportable(&err).to_string(),
            "Configuration error: broken"
        );
        assert!(help_of(&SeqflowError::Io(io::Error::other("x"))).is_none());
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = SeqflowError::tool(
            Stage::Generate,
            ToolError::NotFound {
                program: "clang-uml".into(),
            },
        );
        let adapter = to_reportable(&err);
        let source = adapter.source().expect("tool error is the source");
        assert_eq!(source.to_string(), "`clang-uml` not found on PATH");
    }
}
