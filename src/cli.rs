//! Command-line interface
//!
//! Running with no arguments is the normal case: detect the OS and launch.
//! The flags only tune logging and override settings.

use std::path::PathBuf;

use clap::Parser;

use crate::host::LaunchMode;
use crate::settings::{MacosBehavior, Settings};

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const EXECUTABLE_MISSING: i32 = 2;
    pub const LAUNCH_FAILED: i32 = 3;
    pub const UNSUPPORTED_PLATFORM: i32 = 4;
}

/// Launch the pre-built Fountain visualizer for this platform
#[derive(Debug, Parser)]
#[command(name = "fountain-launcher", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_output: bool,

    /// Settings file (defaults to <config dir>/fountain-launcher/config.toml)
    #[arg(long, value_name = "PATH", env = "FOUNTAIN_LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do on macOS
    #[arg(long, value_enum, value_name = "BEHAVIOR")]
    pub macos: Option<MacosBehavior>,

    /// Return as soon as the visualizer has started instead of waiting for it
    #[arg(long)]
    pub detach: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(behavior) = self.macos {
            settings.macos_behavior = behavior;
        }
        if self.detach {
            settings.launch_mode = LaunchMode::Detach;
        }
        settings
    }
}
