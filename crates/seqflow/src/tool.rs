//! Invocation of external collaborators.
//!
//! The generator and the renderer are separate executables. They run as
//! blocking child processes with inherited stdio, no timeout and no retry.
//! [`CommandRunner`] is the seam between the pipeline and the operating
//! system; [`SystemRunner`] is the production implementation.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, info};
use thiserror::Error;

/// Failure of a single external tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The executable could not be found.
    #[error("`{program}` not found on PATH")]
    NotFound { program: String },

    /// The tool ran and exited unsuccessfully. `status` is `None` when the
    /// process was terminated by a signal.
    #[error("`{program}` exited with {}", describe_status(.status))]
    Failed { program: String, status: Option<i32> },

    /// The tool could not be started for another reason.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ToolError {
    /// Returns the program the failed invocation ran.
    pub fn program(&self) -> &str {
        match self {
            ToolError::NotFound { program }
            | ToolError::Failed { program, .. }
            | ToolError::Launch { program, .. } => program,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// A fully specified command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation of `program` with `args`, run from `cwd`.
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }

    /// Returns the executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external tools to completion.
pub trait CommandRunner {
    /// Run `invocation` and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotFound`] if the executable does not exist,
    /// [`ToolError::Failed`] if it exits unsuccessfully, and
    /// [`ToolError::Launch`] for any other spawn failure.
    fn run(&self, invocation: &Invocation) -> Result<(), ToolError>;
}

/// Runs tools as child processes of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ToolError> {
        let program = invocation.program();

        // A missing working directory also surfaces as `NotFound` from spawn.
        if !invocation.cwd().is_dir() {
            return Err(ToolError::Launch {
                program: program.to_string(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!(
                        "working directory {} does not exist",
                        invocation.cwd().display()
                    ),
                ),
            });
        }

        info!(command = invocation.to_string(), cwd:? = invocation.cwd(); "Running external tool");

        let status = Command::new(program)
            .args(invocation.args())
            .current_dir(invocation.cwd())
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound {
                    program: program.to_string(),
                },
                _ => ToolError::Launch {
                    program: program.to_string(),
                    source: err,
                },
            })?;

        debug!(program = program, status:? = status; "External tool exited");

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                program: program.to_string(),
                status: status.code(),
            })
        }
    }
}
