//! # noticeboard-core
//!
//! Core store logic for Noticeboard, an employee bulletin board with
//! time-limited messages.
//!
//! This crate is framework-agnostic and owns the canonical state of both
//! record collections. Transport layers (REST handlers, WebSocket
//! broadcasters) are thin adapters that call into [`Store`] and translate
//! [`StoreError`] kinds into status codes.
//!
//! ## Key Concepts
//!
//! - **Store**: the single owning instance, constructed once via
//!   [`Store::init`] and passed by reference to all callers
//! - **Commit**: every successful mutation persists the whole JSON document
//!   and then notifies subscribers, in that order
//! - **Composite name key**: employees resolve by id or by a normalized
//!   `firstName+lastName` key
//! - **Sweep**: [`Store::clean_up`] purges messages past their expiry

pub mod error;
pub mod ident;
pub mod notify;
pub mod persistence;
pub mod records;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use error::{ErrorKind, StoreError};
pub use records::{
    Employee, EmployeeId, EmployeeMessages, EmployeePatch, Message, MessageId, MessagePatch,
    StoreData,
};
pub use store::Store;
