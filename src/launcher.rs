//! Launcher - dispatches on the platform identifier
//!
//! One linear pass per invocation: resolve the path table entry, then either
//! start the executable, print the macOS notice, or report the platform as
//! unsupported. Nothing is kept between calls.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::cli::exit_codes;
use crate::core::{action_for, LaunchAction, Platform, MACOS_NOTICE};
use crate::host::{CommandError, LaunchReport, ProcessSpawner};
use crate::settings::{MacosBehavior, Settings};

/// How an invocation ended, short of failing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitSignal {
    /// The executable was started
    Launched(LaunchReport),
    /// macOS notice was printed
    NoticeShown,
    /// macOS, configured to stay quiet
    Silent,
    /// No path table entry for this OS name
    Unsupported(String),
}

impl ExitSignal {
    /// Process exit code for this outcome
    ///
    /// The child's own exit code is not forwarded.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitSignal::Launched(_) | ExitSignal::NoticeShown | ExitSignal::Silent => {
                exit_codes::SUCCESS
            }
            ExitSignal::Unsupported(_) => exit_codes::UNSUPPORTED_PLATFORM,
        }
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Failed to write notice: {0}")]
    Output(#[from] io::Error),
}

pub struct Launcher<S> {
    spawner: S,
    settings: Settings,
}

impl<S: ProcessSpawner> Launcher<S> {
    pub fn new(spawner: S, settings: Settings) -> Self {
        Self { spawner, settings }
    }

    /// Run the dispatch for `platform`, writing any notice to `out`
    pub fn run<W: Write>(
        &self,
        platform: &Platform,
        out: &mut W,
    ) -> Result<ExitSignal, LaunchError> {
        let action = action_for(platform);
        tracing::debug!(%platform, ?action, "Resolved launch action");

        match action {
            LaunchAction::Spawn(path) => {
                let report = self
                    .spawner
                    .spawn(Path::new(path), self.settings.launch_mode)?;
                Ok(ExitSignal::Launched(report))
            }
            LaunchAction::MacosNotice => match self.settings.macos_behavior {
                MacosBehavior::Notice => {
                    writeln!(out, "{}", MACOS_NOTICE)?;
                    out.flush()?;
                    Ok(ExitSignal::NoticeShown)
                }
                MacosBehavior::Silent => Ok(ExitSignal::Silent),
            },
            LaunchAction::Unsupported(name) => {
                tracing::debug!(os = %name, "No Fountain build for this platform");
                Ok(ExitSignal::Unsupported(name))
            }
        }
    }
}
