//! Expiry sweeping.

use chrono::Utc;

use super::Store;
use crate::validate;

impl Store {
    /// Remove every message whose expiry is invalid or due, and return the
    /// removed count.
    ///
    /// A message with no expiry never expires. Expiry is date-granular: a
    /// message expiring today is already due. A present-but-unparseable
    /// expiry (possible in a hand-edited store file) is purged rather than
    /// kept forever. Persists only when something was removed, so repeated
    /// runs are no-ops.
    ///
    /// Meant to run once at startup and on a daily schedule; the scheduler
    /// is the caller's concern.
    pub fn clean_up(&mut self) -> usize {
        let today = Utc::now().date_naive();
        let before = self.data.messages.len();

        self.data
            .messages
            .retain(|message| match message.expires_at.as_deref() {
                None => true,
                Some(raw) => match validate::parse_expiry(raw) {
                    Some(date) => date > today,
                    None => false,
                },
            });

        let removed = before - self.data.messages.len();
        if removed > 0 {
            log::info!("Swept {} expired message(s)", removed);
            self.commit();
        }
        removed
    }
}
