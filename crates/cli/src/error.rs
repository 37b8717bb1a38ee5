//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map `ClientError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + 2).

use logpoint_client::ClientError;

/// Structured exit codes for logpoint-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The server explicitly rejected the query or a result page.
    ///
    /// Scripts should fix the query and not retry the same request.
    Rejected = 2,

    /// Connection error - network, timeout, TLS, or HTTP status failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The poll budget ran out before the server reported completion.
    ///
    /// Scripts may retry with a larger budget or a narrower query.
    PollExhausted = 4,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Maps an error chain onto a structured exit code.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<ClientError>() {
            Some(ClientError::Rejected { .. }) => ExitCode::Rejected,
            Some(ClientError::Http(_)) | Some(ClientError::ApiError { .. }) => {
                ExitCode::ConnectionError
            }
            Some(ClientError::PollExhausted { .. }) => ExitCode::PollExhausted,
            Some(ClientError::Cancelled) => ExitCode::Interrupted,
            _ => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_maps_to_exit_code_2() {
        let err = anyhow::Error::new(ClientError::Rejected {
            message: "bad query".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::Rejected);
        assert_eq!(err.exit_code().as_i32(), 2);
    }

    #[test]
    fn test_api_error_maps_to_connection_error() {
        let err = anyhow::Error::new(ClientError::ApiError {
            status: 503,
            url: "https://lp.example.com/getsearchlogs".to_string(),
            message: "maintenance".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::ConnectionError);
    }

    #[test]
    fn test_poll_exhausted_maps_to_exit_code_4() {
        let err = anyhow::Error::new(ClientError::PollExhausted { attempts: 50 });
        assert_eq!(err.exit_code(), ExitCode::PollExhausted);
    }

    #[test]
    fn test_cancelled_maps_to_interrupted() {
        let err = anyhow::Error::new(ClientError::Cancelled);
        assert_eq!(err.exit_code(), ExitCode::Interrupted);
        assert_eq!(err.exit_code().as_i32(), 130);
    }

    #[test]
    fn test_unknown_error_maps_to_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
