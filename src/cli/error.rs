//! CLI-level errors (wraps domain and settings errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Tree(e) => match e {
                TreeError::InOrderRequiresBinary { .. } | TreeError::UnknownOrder(_) => {
                    crate::exitcode::USAGE
                }
                TreeError::ParentNotFound(_) | TreeError::ArityExceeded { .. } => {
                    crate::exitcode::DATAERR
                }
                TreeError::TraversalExhausted { .. } => crate::exitcode::SOFTWARE,
            },
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TraversalOrder;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::InvalidArgs("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
        assert_eq!(
            CliError::from(TreeError::InOrderRequiresBinary { arity: 3 }).exit_code(),
            crate::exitcode::USAGE
        );
        assert_eq!(
            CliError::from(TreeError::ParentNotFound("7".into())).exit_code(),
            crate::exitcode::DATAERR
        );
        assert_eq!(
            CliError::from(TreeError::TraversalExhausted {
                order: TraversalOrder::Heap
            })
            .exit_code(),
            crate::exitcode::SOFTWARE
        );
    }
}
