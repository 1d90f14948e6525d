//! Record types for the two collections and the persisted document.
//!
//! Everything here serializes with camelCase keys; the structs double as the
//! on-disk layout and the payloads handed to transport adapters.

use serde::{Deserialize, Serialize};

/// Unique identifier for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, immutable once assigned.
    pub id: EmployeeId,

    pub first_name: String,

    pub last_name: String,
}

impl Employee {
    /// Normalized full-name key used for the alternate lookup and the
    /// uniqueness check.
    pub(crate) fn name_key(&self) -> String {
        name_key(&format!("{}{}", self.first_name, self.last_name))
    }
}

/// Normalize a composite-name key: strip `+` separators and whitespace,
/// Unicode-lowercase the rest. Diacritics are preserved, so `Bärrü+Ällëñ`
/// and `bärrü ällëñ` collapse to the same key while staying distinct from
/// `barru allen`.
pub(crate) fn name_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '+' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A message addressed to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Store-assigned identifier, immutable once assigned.
    pub id: MessageId,

    /// Id of the owning employee.
    pub employee: EmployeeId,

    /// The message body.
    pub message: String,

    /// Expiration date in `YYYY-MM-DD` form. Absent means the message never
    /// expires. Kept as a plain string so an invalid date in a hand-edited
    /// store file stays representable until the sweeper purges it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Partial employee update. Absent or empty fields leave the prior value
/// unchanged, so a field cannot be intentionally blanked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Partial message update. Same overwrite rules as [`EmployeePatch`]; a
/// provided `expiresAt` must pass validation before anything changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// The whole persisted store document: both collections, insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    pub employees: Vec<Employee>,
    pub messages: Vec<Message>,
}

/// One row of the batched view: an employee together with every message
/// addressed to them. Only produced for employees owning at least one
/// message; the employee's fields flatten to the top level so the row reads
/// as "employee plus `messages`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMessages {
    #[serde(flatten)]
    pub employee: Employee,

    pub messages: Vec<Message>,
}
