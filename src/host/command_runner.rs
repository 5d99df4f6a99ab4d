//! Command Runner
//!
//! Starts the pre-built visualizer as a child process.
//! No arguments are passed and stdio is inherited, so the child owns the
//! terminal (or its own window) exactly as if it had been started by hand.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;

/// How long the launcher stays attached to the child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Block until the child exits
    #[default]
    Wait,
    /// Return as soon as the process has started
    Detach,
}

/// Outcome of a successful process start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReport {
    /// OS process id of the child
    pub pid: u32,
    /// Exit code, only known in `Wait` mode (None if killed by a signal)
    pub exit_code: Option<i32>,
}

/// Process start errors
#[derive(Debug, Error)]
pub enum CommandError {
    /// Nothing exists at the target path
    #[error("Executable '{}' not found relative to the current directory", .0.display())]
    BinaryNotFound(PathBuf),

    /// The OS refused to start the process
    #[error("Failed to launch '{}': {source}", .program.display())]
    LaunchFailed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that can start a process
pub trait ProcessSpawner {
    /// Start `program` with no arguments
    fn spawn(&self, program: &Path, mode: LaunchMode) -> Result<LaunchReport, CommandError>;
}

/// Spawner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for CommandRunner {
    fn spawn(&self, program: &Path, mode: LaunchMode) -> Result<LaunchReport, CommandError> {
        if !program.exists() {
            return Err(CommandError::BinaryNotFound(program.to_path_buf()));
        }

        let launch_failed = |source: io::Error| CommandError::LaunchFailed {
            program: program.to_path_buf(),
            source,
        };

        let mut child = Command::new(program).spawn().map_err(launch_failed)?;
        let pid = child.id();
        tracing::debug!(pid, program = %program.display(), "Started process");

        let exit_code = match mode {
            LaunchMode::Detach => None,
            LaunchMode::Wait => {
                let status = child.wait().map_err(launch_failed)?;
                tracing::debug!(pid, %status, "Process exited");
                status.code()
            }
        };

        Ok(LaunchReport { pid, exit_code })
    }
}
