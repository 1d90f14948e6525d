//! Message repository operations and the batched view.

use chrono::Utc;

use super::Store;
use crate::error::StoreError;
use crate::ident;
use crate::records::{EmployeeMessages, Message, MessageId, MessagePatch};
use crate::validate;

/// An expiry supplied by a caller must be a real calendar date strictly
/// after today (UTC). Already-due dates are a client error; the sweeper
/// handles dates that become due while stored.
fn check_expiry(raw: &str) -> Result<(), StoreError> {
    match validate::parse_expiry(raw) {
        Some(date) if date > Utc::now().date_naive() => Ok(()),
        _ => Err(StoreError::InvalidExpiration),
    }
}

impl Store {
    /// Fetch one message by exact id.
    pub fn get_message(&self, id: &str) -> Result<Message, StoreError> {
        self.data
            .messages
            .iter()
            .find(|m| m.id.0 == id)
            .cloned()
            .ok_or(StoreError::MessageNotFound)
    }

    /// Snapshot of all messages, insertion order.
    pub fn list_messages(&self) -> Vec<Message> {
        self.data.messages.clone()
    }

    /// The relational view: every employee owning at least one message,
    /// paired with that employee's messages in insertion order. Employees
    /// with no messages are omitted entirely.
    pub fn batched_messages(&self) -> Vec<EmployeeMessages> {
        self.data
            .employees
            .iter()
            .filter_map(|employee| {
                let messages: Vec<Message> = self
                    .data
                    .messages
                    .iter()
                    .filter(|m| m.employee == employee.id)
                    .cloned()
                    .collect();

                if messages.is_empty() {
                    None
                } else {
                    Some(EmployeeMessages {
                        employee: employee.clone(),
                        messages,
                    })
                }
            })
            .collect()
    }

    /// Create a message addressed to `employee_ref` (id or name key) and
    /// return its new id. The stored record always carries the resolved
    /// employee id, never the raw reference.
    pub fn add_message(
        &mut self,
        employee_ref: &str,
        body: &str,
        expires_at: Option<&str>,
    ) -> Result<MessageId, StoreError> {
        let owner = self
            .find_employee(employee_ref)
            .map(|e| e.id.clone())
            .ok_or(StoreError::UnknownEmployee)?;

        if let Some(date) = expires_at {
            check_expiry(date)?;
        }

        let id = MessageId(ident::generate(|candidate| {
            self.data.messages.iter().any(|m| m.id.0 == candidate)
        }));

        self.data.messages.push(Message {
            id: id.clone(),
            employee: owner,
            message: body.to_string(),
            expires_at: expires_at.map(str::to_string),
        });
        self.commit();

        Ok(id)
    }

    /// Partially update a message by id.
    ///
    /// A provided `expiresAt` is validated before anything changes; only
    /// supplied, non-empty fields are overwritten.
    pub fn update_message(&mut self, id: &str, patch: MessagePatch) -> Result<(), StoreError> {
        let index = self
            .data
            .messages
            .iter()
            .position(|m| m.id.0 == id)
            .ok_or(StoreError::MessageNotFound)?;

        if let Some(date) = patch.expires_at.as_deref() {
            check_expiry(date)?;
        }

        let message = &mut self.data.messages[index];
        if let Some(body) = patch.message.filter(|b| !b.is_empty()) {
            message.message = body;
        }
        if let Some(date) = patch.expires_at {
            message.expires_at = Some(date);
        }
        self.commit();

        Ok(())
    }

    /// Remove exactly the message with the given id.
    pub fn remove_message(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .data
            .messages
            .iter()
            .position(|m| m.id.0 == id)
            .ok_or(StoreError::MessageNotFound)?;

        self.data.messages.remove(index);
        self.commit();

        Ok(())
    }
}
