//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: [`cli_runner::CliRunner`] runs `wildcard_cli` in-process
//!   with scripted stdin and temporary environment overrides, capturing
//!   stdout, stderr and the exit code.
//! - `temp_files`: [`temp_files::TempFileManager`] hands out paths inside a
//!   temp dir that is removed on drop.

pub mod cli_runner;
pub mod temp_files;

/// Env vars the config layer reads; cleared around every run.
pub const CONFIG_VARS: &[&str] = &[
    "WILDCARD_CONFIG",
    "WILDCARD_SEED",
    "WILDCARD_PLAYERS",
    "WILDCARD_AI",
];
