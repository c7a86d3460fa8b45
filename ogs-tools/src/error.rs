// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::process::ExitStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("project name is required")]
    MissingName,
    #[error("`{0}` could not be run; is it installed and on your PATH?")]
    NpmNotFound(String),

    #[error("{0}")]
    Command(#[from] CommandError),
    #[error("{0}")]
    Emit(#[from] crate::core::project::layout::EmitError),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    CommandFailure(#[from] CommandFailure),
}

/// A subprocess which ran to completion but did not succeed.
///
/// Output is not captured since subprocesses inherit stdio, so only the exit code is kept.
#[derive(Debug, thiserror::Error)]
#[error("{process_name} failed (exit code: {code})", code = display_code(.exit_code))]
pub struct CommandFailure {
    pub process_name: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandFailure {
    pub fn check(process_name: impl Into<String>, status: ExitStatus) -> Result<(), Self> {
        if status.success() {
            Ok(())
        } else {
            Err(CommandFailure {
                process_name: process_name.into(),
                exit_code: status.code(),
            })
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[test]
    fn check_passes_success() {
        assert!(CommandFailure::check("npm install", ExitStatus::from_raw(0)).is_ok());
    }

    #[test]
    fn check_keeps_exit_code() {
        // Raw wait status: exit code lives in the second byte
        let err = CommandFailure::check("npm install", ExitStatus::from_raw(7 << 8)).unwrap_err();
        assert_eq!(err.exit_code, Some(7));
        assert_eq!(err.to_string(), "npm install failed (exit code: 7)");
    }

    #[test]
    fn check_reports_signal() {
        let err = CommandFailure::check("npm create", ExitStatus::from_raw(9)).unwrap_err();
        assert_eq!(err.exit_code, None);
        assert_eq!(err.to_string(), "npm create failed (exit code: signal)");
    }
}
