//! fountain-launcher - starts the pre-built Fountain visualizer
//!
//! Detects the host OS and:
//! - Windows / Linux: runs the bundled Fountain executable
//! - macOS: prints a notice that Fountain is not supported
//! - anything else: reports the platform as unsupported and exits non-zero

mod cli;
mod core;
mod host;
mod launcher;
mod logging;
mod settings;

use std::io::Write;

use clap::Parser;
use cli::{exit_codes, Cli};
use host::{CommandError, CommandRunner};
use launcher::{ExitSignal, LaunchError, Launcher};
use settings::Settings;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let mut stderr = std::io::stderr();
    let settings = match resolve_settings(&cli, &mut stderr) {
        Ok(settings) => settings,
        Err(code) => return code,
    };

    let platform = crate::core::Platform::detect();
    tracing::debug!(%platform, ?settings, "Starting launcher");

    let launcher = Launcher::new(CommandRunner::new(), settings);
    let result = launcher.run(&platform, &mut std::io::stdout().lock());
    finish(result, &mut stderr)
}

/// Load settings and apply CLI overrides, or report why they could not be loaded
fn resolve_settings<W: Write>(cli: &Cli, err: &mut W) -> Result<Settings, i32> {
    let loaded = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    };
    loaded.map(|settings| cli.apply_overrides(settings)).map_err(|e| {
        let _ = writeln!(err, "Error: {}", e);
        exit_codes::UNEXPECTED_FAILURE
    })
}

/// Map the launcher outcome to an exit code, writing one diagnostic line on failure
fn finish<W: Write>(result: Result<ExitSignal, LaunchError>, err: &mut W) -> i32 {
    match result {
        Ok(ExitSignal::Unsupported(name)) => {
            let _ = writeln!(err, "Fountain is not supported on {}", name);
            exit_codes::UNSUPPORTED_PLATFORM
        }
        Ok(ExitSignal::Launched(report)) => {
            tracing::debug!(
                pid = report.pid,
                exit_code = ?report.exit_code,
                "Visualizer launched"
            );
            ExitSignal::Launched(report).exit_code()
        }
        Ok(signal) => signal.exit_code(),
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            categorize_error(&e)
        }
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &LaunchError) -> i32 {
    match e {
        LaunchError::Command(CommandError::BinaryNotFound(_)) => exit_codes::EXECUTABLE_MISSING,
        LaunchError::Command(CommandError::LaunchFailed { .. }) => exit_codes::LAUNCH_FAILED,
        LaunchError::Output(_) => exit_codes::UNEXPECTED_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    fn parse_with_config(flags: &[&str], config: &Path) -> Cli {
        let mut args: Vec<OsString> = vec!["fountain-launcher".into()];
        args.extend(flags.iter().map(OsString::from));
        args.push(config.as_os_str().to_owned());
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_categorize_error() {
        let missing = LaunchError::Command(CommandError::BinaryNotFound(PathBuf::from("x")));
        assert_eq!(categorize_error(&missing), exit_codes::EXECUTABLE_MISSING);

        let failed = LaunchError::Command(CommandError::LaunchFailed {
            program: PathBuf::from("x"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(categorize_error(&failed), exit_codes::LAUNCH_FAILED);

        let output = LaunchError::Output(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(categorize_error(&output), exit_codes::UNEXPECTED_FAILURE);
    }

    #[test]
    fn test_failures_are_never_success() {
        let missing = LaunchError::Command(CommandError::BinaryNotFound(PathBuf::from("x")));
        assert_ne!(categorize_error(&missing), exit_codes::SUCCESS);
    }

    #[test]
    fn test_unsupported_platform_reports_and_exits_non_zero() {
        let mut err = Vec::new();
        let code = finish(Ok(ExitSignal::Unsupported("freebsd".to_string())), &mut err);

        assert_eq!(code, exit_codes::UNSUPPORTED_PLATFORM);
        assert_eq!(String::from_utf8(err).unwrap(), "Fountain is not supported on freebsd\n");
    }

    #[test]
    fn test_success_paths_stay_quiet() {
        let launched = ExitSignal::Launched(host::LaunchReport {
            pid: 1,
            exit_code: Some(7),
        });
        for signal in [launched, ExitSignal::NoticeShown, ExitSignal::Silent] {
            let mut err = Vec::new();
            assert_eq!(finish(Ok(signal), &mut err), exit_codes::SUCCESS);
            assert!(err.is_empty());
        }
    }

    #[test]
    fn test_launch_failure_reported_once() {
        let mut err = Vec::new();
        let missing = LaunchError::Command(CommandError::BinaryNotFound(PathBuf::from("x")));
        let code = finish(Err(missing), &mut err);

        assert_eq!(code, exit_codes::EXECUTABLE_MISSING);
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("Error: Executable 'x' not found"));
    }

    #[test]
    fn test_bad_settings_file_exits_with_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let cli = parse_with_config(&["--config"], &config);

        let mut err = Vec::new();
        let code = resolve_settings(&cli, &mut err).unwrap_err();

        assert_eq!(code, exit_codes::UNEXPECTED_FAILURE);
        assert!(String::from_utf8(err)
            .unwrap()
            .starts_with("Error: Failed to read settings file"));
    }

    #[test]
    fn test_settings_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "macos-behavior = \"silent\"\n").unwrap();
        let cli = parse_with_config(&["--detach", "--config"], &config);

        let mut err = Vec::new();
        let settings = resolve_settings(&cli, &mut err).unwrap();

        assert_eq!(settings.macos_behavior, settings::MacosBehavior::Silent);
        assert_eq!(settings.launch_mode, host::LaunchMode::Detach);
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_windows_executable_exits_non_zero() {
        let dir = tempfile::tempdir().unwrap();
        let program = dir.path().join("Fountain.exe");
        let err: LaunchError = host::ProcessSpawner::spawn(
            &CommandRunner::new(),
            &program,
            host::LaunchMode::Wait,
        )
        .unwrap_err()
        .into();
        assert_eq!(categorize_error(&err), exit_codes::EXECUTABLE_MISSING);
    }
}
