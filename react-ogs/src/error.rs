// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use ogs_tools::CommandFailure;

use crate::constants::USAGE;

pub type ReactOgsResult = Result<(), ReactOgsError>;

#[derive(Debug)]
pub struct ReactOgsError {
    error: eyre::Error,
    exit_code: u8,
    hint: Option<&'static str>,
}

impl ReactOgsError {
    /// An error caused by invalid arguments, reported along with the usage line.
    pub fn usage(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: 1,
            hint: Some(USAGE),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_code)
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint
    }
}

impl fmt::Display for ReactOgsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<eyre::Error> for ReactOgsError {
    fn from(error: eyre::Error) -> Self {
        let exit_code = propagated_exit_code(&error);
        Self {
            error,
            exit_code,
            hint: None,
        }
    }
}

impl From<ogs_tools::Error> for ReactOgsError {
    fn from(err: ogs_tools::Error) -> Self {
        eyre::Error::from(err).into()
    }
}

/// Exit with the same code as a failed npm command, falling back to 1 when the code is unknown
/// or does not fit in an exit status.
fn propagated_exit_code(error: &eyre::Error) -> u8 {
    error
        .chain()
        .find_map(|err| err.downcast_ref::<CommandFailure>())
        .and_then(|failure| failure.exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|&code| code != 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use ogs_tools::CommandError;

    use super::*;

    fn npm_failure(exit_code: Option<i32>) -> ReactOgsError {
        let failure = CommandFailure {
            process_name: "npm install".to_string(),
            exit_code,
        };
        ogs_tools::Error::Command(CommandError::CommandFailure(failure)).into()
    }

    #[test]
    fn npm_exit_code_is_propagated() {
        let err = npm_failure(Some(7));
        assert_eq!(err.exit_code, 7);
        assert_eq!(err.to_string(), "npm install failed (exit code: 7)");
    }

    #[test]
    fn unrepresentable_exit_code_falls_back() {
        assert_eq!(npm_failure(None).exit_code, 1);
        assert_eq!(npm_failure(Some(300)).exit_code, 1);
        assert_eq!(npm_failure(Some(-1)).exit_code, 1);
    }

    #[test]
    fn usage_error_has_hint() {
        let err = ReactOgsError::usage(ogs_tools::Error::MissingName);
        assert_eq!(err.exit_code, 1);
        assert_eq!(err.to_string(), "project name is required");
        assert_eq!(err.hint(), Some(USAGE));
    }

    #[test]
    fn other_errors_exit_with_one() {
        let err = ReactOgsError::from(eyre::eyre!("something broke"));
        assert_eq!(err.exit_code, 1);
        assert_eq!(err.hint(), None);
    }
}
