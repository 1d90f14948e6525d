//! Store error taxonomy.
//!
//! Every fallible store operation returns one of these variants. Transport
//! adapters map the [`ErrorKind`] to a status code (NotFound -> 404,
//! Conflict and BadRequest -> 400) and use the `Display` string as the
//! response body, without matching on individual variants.

use thiserror::Error;

/// Coarse classification of a failure, for transport adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lookup target does not exist.
    NotFound,

    /// The mutation collides with existing state.
    Conflict,

    /// The request payload is invalid.
    BadRequest,
}

/// A recoverable store failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Message not found")]
    MessageNotFound,

    #[error("Employee already exists")]
    EmployeeExists,

    #[error("No employee with the given id")]
    UnknownEmployee,

    #[error("Invalid expiration date")]
    InvalidExpiration,
}

impl StoreError {
    /// The classification a transport adapter should translate.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::EmployeeNotFound | StoreError::MessageNotFound => ErrorKind::NotFound,
            StoreError::EmployeeExists => ErrorKind::Conflict,
            StoreError::UnknownEmployee | StoreError::InvalidExpiration => ErrorKind::BadRequest,
        }
    }
}
