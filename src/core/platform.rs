//! Platform identifier - the host operating system the launcher dispatches on

use std::fmt;

/// Host operating system, as far as the launcher cares
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    /// Anything else, carrying the raw OS name (e.g. "freebsd")
    Other(String),
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name to a platform identifier
    ///
    /// Accepts both Rust's `consts::OS` names and the uname-style "darwin".
    pub fn from_os_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            _ => Platform::Other(name.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
