//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => crate::exitcode::NOINPUT,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::InvalidValue { .. }) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Domain(DomainError::InvalidRange(_)) => crate::exitcode::USAGE,
                ApplicationError::Config { .. } | ApplicationError::ConfigNotFound(_) => {
                    crate::exitcode::CONFIG
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_sysexits() {
        let invalid: CliError = DomainError::InvalidValue {
            token: "x".into(),
            reason: "nope".into(),
        }
        .into();
        assert_eq!(invalid.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(
            CliError::from(DomainError::InvalidRange(-1)).exit_code(),
            crate::exitcode::USAGE
        );
        assert_eq!(
            CliError::NotFound("7".into()).exit_code(),
            crate::exitcode::NOINPUT
        );
        let config: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_domain_error_when_displayed_then_message_passes_through() {
        let err = CliError::from(DomainError::InvalidValue {
            token: "abc".into(),
            reason: "invalid digit found in string".into(),
        });
        assert_eq!(
            err.to_string(),
            "invalid value 'abc': invalid digit found in string"
        );
    }
}
