//! Host module for process management

pub mod command_runner;

pub use command_runner::{CommandError, CommandRunner, LaunchMode, LaunchReport, ProcessSpawner};
