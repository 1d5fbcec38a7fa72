//! Operation outcome model shared by every call in this crate.

use thiserror::Error;

/// Result codes reported by store operations.
///
/// The numeric values are part of the wire contract and are assigned by both
/// the server (operation outcomes) and the client (transport and usage
/// failures).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum StatusCode {
    /// Success.
    #[default]
    Success = 0,
    /// Generic error whose cause is unknown.
    UnknownError = 1,
    /// Generic error from underlying systems.
    SystemError = 2,
    /// Error that the feature is not implemented.
    NotImplementedError = 3,
    /// Error that a precondition is not met.
    PreconditionError = 4,
    /// Error that a given argument is invalid.
    InvalidArgumentError = 5,
    /// Error that the operation is canceled.
    CanceledError = 6,
    /// Error that a specific resource is not found.
    NotFoundError = 7,
    /// Error that the operation is not permitted.
    PermissionError = 8,
    /// Error that the operation is infeasible.
    InfeasibleError = 9,
    /// Error that a specific resource is duplicated.
    DuplicationError = 10,
    /// Error that internal data are broken.
    BrokenDataError = 11,
    /// Error caused by networking failure.
    NetworkError = 12,
    /// Generic error caused by the application logic.
    ApplicationError = 13,
}

impl StatusCode {
    /// Gets the string name of the code.
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Success => "SUCCESS",
            StatusCode::UnknownError => "UNKNOWN_ERROR",
            StatusCode::SystemError => "SYSTEM_ERROR",
            StatusCode::NotImplementedError => "NOT_IMPLEMENTED_ERROR",
            StatusCode::PreconditionError => "PRECONDITION_ERROR",
            StatusCode::InvalidArgumentError => "INVALID_ARGUMENT_ERROR",
            StatusCode::CanceledError => "CANCELED_ERROR",
            StatusCode::NotFoundError => "NOT_FOUND_ERROR",
            StatusCode::PermissionError => "PERMISSION_ERROR",
            StatusCode::InfeasibleError => "INFEASIBLE_ERROR",
            StatusCode::DuplicationError => "DUPLICATION_ERROR",
            StatusCode::BrokenDataError => "BROKEN_DATA_ERROR",
            StatusCode::NetworkError => "NETWORK_ERROR",
            StatusCode::ApplicationError => "APPLICATION_ERROR",
        }
    }

    /// Decodes a wire-level code.  Values outside the taxonomy collapse to
    /// [`StatusCode::UnknownError`].
    pub fn from_i32(code: i32) -> StatusCode {
        match code {
            0 => StatusCode::Success,
            1 => StatusCode::UnknownError,
            2 => StatusCode::SystemError,
            3 => StatusCode::NotImplementedError,
            4 => StatusCode::PreconditionError,
            5 => StatusCode::InvalidArgumentError,
            6 => StatusCode::CanceledError,
            7 => StatusCode::NotFoundError,
            8 => StatusCode::PermissionError,
            9 => StatusCode::InfeasibleError,
            10 => StatusCode::DuplicationError,
            11 => StatusCode::BrokenDataError,
            12 => StatusCode::NetworkError,
            13 => StatusCode::ApplicationError,
            _ => StatusCode::UnknownError,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Status of an operation: a [`StatusCode`] plus an optional diagnostic
/// message.
///
/// Two statuses are equal when their codes match; the message is diagnostic
/// only and never compared.  A status also compares equal to a bare
/// [`StatusCode`]:
///
/// ```
/// use coffer_client::{Status, StatusCode};
///
/// let status = Status::new(StatusCode::NotFoundError, "no such record");
/// assert_eq!(status, StatusCode::NotFoundError);
/// assert_eq!(status, Status::new(StatusCode::NotFoundError, ""));
/// ```
#[derive(Error, Debug, Clone, Default)]
#[error("{}", format_status(.code, .message))]
pub struct Status {
    code: StatusCode,
    message: String,
}

fn format_status(code: &StatusCode, message: &str) -> String {
    if message.is_empty() {
        code.name().to_string()
    } else {
        format!("{}: {}", code.name(), message)
    }
}

impl Status {
    /// Creates a status with a code and a message.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Status {
        Status {
            code,
            message: message.into(),
        }
    }

    /// Creates a success status with an empty message.
    pub fn ok() -> Status {
        Status::default()
    }

    /// Gets the status code.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Gets the status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the code and the message.
    pub fn set(&mut self, code: StatusCode, message: impl Into<String>) {
        self.code = code;
        self.message = message.into();
    }

    /// Assigns the state of `other` only if the current state is success.
    ///
    /// Folding several sub-operation outcomes through `join` keeps the first
    /// failure and discards everything reported after it.
    pub fn join(&mut self, other: Status) {
        if self.code == StatusCode::Success {
            self.code = other.code;
            self.message = other.message;
        }
    }

    /// Returns true if the status is success.
    pub fn is_ok(&self) -> bool {
        self.code == StatusCode::Success
    }

    /// Panics with this status unless it is success.
    ///
    /// # Panics
    ///
    /// Panics when the code is anything other than
    /// [`StatusCode::Success`].
    pub fn or_die(&self) {
        if self.code != StatusCode::Success {
            panic!("{}", self);
        }
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Status) -> bool {
        self.code == other.code
    }
}

impl Eq for Status {}

impl PartialEq<StatusCode> for Status {
    fn eq(&self, other: &StatusCode) -> bool {
        self.code == *other
    }
}

impl PartialEq<Status> for StatusCode {
    fn eq(&self, other: &Status) -> bool {
        *self == other.code
    }
}

impl From<StatusCode> for Status {
    fn from(code: StatusCode) -> Status {
        Status {
            code,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_success() {
        let status = Status::ok();
        assert!(status.is_ok());
        assert_eq!(status.code(), StatusCode::Success);
        assert_eq!(status.message(), "");
    }

    #[test]
    fn equality_ignores_message() {
        let a = Status::new(StatusCode::NotFoundError, "one");
        let b = Status::new(StatusCode::NotFoundError, "two");
        assert_eq!(a, b);
        assert_ne!(a, Status::ok());
    }

    #[test]
    fn compares_with_bare_code() {
        let status = Status::new(StatusCode::DuplicationError, "exists");
        assert_eq!(status, StatusCode::DuplicationError);
        assert_eq!(StatusCode::DuplicationError, status);
        assert_ne!(status, StatusCode::Success);
    }

    #[test]
    fn set_replaces_both_fields() {
        let mut status = Status::ok();
        status.set(StatusCode::NetworkError, "connection reset");
        assert_eq!(status.code(), StatusCode::NetworkError);
        assert_eq!(status.message(), "connection reset");
    }

    #[test]
    fn join_overwrites_success() {
        let mut status = Status::ok();
        status.join(Status::new(StatusCode::NotFoundError, "missing"));
        assert_eq!(status.code(), StatusCode::NotFoundError);
        assert_eq!(status.message(), "missing");
    }

    #[test]
    fn join_keeps_first_failure() {
        let mut status = Status::new(StatusCode::DuplicationError, "first");
        status.join(Status::new(StatusCode::NetworkError, "second"));
        assert_eq!(status.code(), StatusCode::DuplicationError);
        assert_eq!(status.message(), "first");
        status.join(Status::ok());
        assert_eq!(status.code(), StatusCode::DuplicationError);
    }

    #[test]
    fn display_includes_message_when_present() {
        let status = Status::new(StatusCode::InfeasibleError, "status mismatch");
        assert_eq!(status.to_string(), "INFEASIBLE_ERROR: status mismatch");
        assert_eq!(Status::ok().to_string(), "SUCCESS");
    }

    #[test]
    fn or_die_is_silent_on_success() {
        Status::ok().or_die();
    }

    #[test]
    #[should_panic(expected = "NOT_FOUND_ERROR")]
    fn or_die_panics_on_failure() {
        Status::new(StatusCode::NotFoundError, "gone").or_die();
    }

    #[test]
    fn decodes_unknown_wire_codes() {
        assert_eq!(StatusCode::from_i32(7), StatusCode::NotFoundError);
        assert_eq!(StatusCode::from_i32(99), StatusCode::UnknownError);
        assert_eq!(StatusCode::from_i32(-1), StatusCode::UnknownError);
    }
}
