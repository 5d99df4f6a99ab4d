//! Path table - what to do on each platform
//!
//! Paths are relative to the directory the launcher is invoked from.

use super::Platform;

/// Pre-built Fountain executable for Windows
pub const WINDOWS_EXECUTABLE: &str =
    "..\\..\\..\\examples\\fountain\\visualizern\\win\\Fountain.exe";

/// Pre-built Fountain executable for Linux
pub const LINUX_EXECUTABLE: &str = "./examples/fountain/linux/Fountain.x86_64";

/// Red notice printed on macOS, where no build exists
pub const MACOS_NOTICE: &str = "\x1b[91m Fountain is not supported on macOS! \x1b[00m";

/// Action resolved for a platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// Start the executable at this relative path, with no arguments
    Spawn(&'static str),
    /// Tell the user macOS is not supported
    MacosNotice,
    /// No entry for this platform
    Unsupported(String),
}

/// Resolve the action for a platform
pub fn action_for(platform: &Platform) -> LaunchAction {
    // No wildcard arm: a new Platform variant must be placed in the table.
    match platform {
        Platform::Windows => LaunchAction::Spawn(WINDOWS_EXECUTABLE),
        Platform::Linux => LaunchAction::Spawn(LINUX_EXECUTABLE),
        Platform::MacOs => LaunchAction::MacosNotice,
        Platform::Other(name) => LaunchAction::Unsupported(name.clone()),
    }
}
