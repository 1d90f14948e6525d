//! The store instance.
//!
//! One [`Store`] is constructed at process start via [`Store::init`] and
//! passed by reference to every caller; there are no hidden globals. All
//! mutating operations funnel through a single commit step: apply the
//! in-memory change, persist the whole document, then notify subscribers.
//! Reads hand out clones, so callers never hold references into the
//! collections.
//!
//! Mutations take `&mut self` and run the whole mutate-persist-notify
//! sequence without suspension; a multi-threaded host wraps the instance in
//! one `Mutex` (subscribers are `Send`).

mod employees;
mod messages;
mod sweep;

use std::path::PathBuf;

use crate::ident;
use crate::notify::ChangeNotifier;
use crate::persistence;
use crate::records::{name_key, Employee, StoreData};

/// The canonical in-memory store and its durable backing file.
pub struct Store {
    path: PathBuf,
    data: StoreData,
    notifier: ChangeNotifier,
}

impl Store {
    /// Open the store backed by the file at `path`.
    ///
    /// Reads and parses the document, replacing the in-memory state and
    /// firing one change notification. A missing or unreadable file is not
    /// an error: the store starts empty and immediately persists a fresh
    /// valid document in its place.
    pub fn init(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            data: StoreData::default(),
            notifier: ChangeNotifier::new(),
        };

        match persistence::load(&store.path) {
            Ok(data) => {
                log::info!(
                    "Loaded store from {} ({} employees, {} messages)",
                    store.path.display(),
                    data.employees.len(),
                    data.messages.len()
                );
                store.data = data;
                store.notifier.emit();
            }
            Err(err) => {
                log::warn!(
                    "No usable store file at {}, starting empty: {}",
                    store.path.display(),
                    err
                );
                store.commit();
            }
        }

        store
    }

    /// Register a change subscriber.
    ///
    /// The callback runs once immediately, then again after every
    /// successful persist, synchronously on the mutating caller's thread.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn() + Send + 'static,
    {
        self.notifier.subscribe(callback);
    }

    /// Clear both collections and persist the empty document.
    pub fn reset(&mut self) {
        self.data.employees.clear();
        self.data.messages.clear();
        self.commit();
    }

    /// Persist the current state, then notify subscribers.
    ///
    /// A failed save is logged and swallowed: the in-memory mutation stands
    /// and the triggering operation still reports success. Subscribers are
    /// only notified when the write went through.
    pub(crate) fn commit(&self) {
        match persistence::save(&self.path, &self.data) {
            Ok(()) => self.notifier.emit(),
            Err(err) => {
                log::warn!(
                    "Failed to persist store to {}: {}",
                    self.path.display(),
                    err
                );
            }
        }
    }

    /// Resolve an employee position by exact id or composite name key.
    ///
    /// Inputs matching the canonical identifier layout resolve by id;
    /// anything else is treated as a `firstName+lastName` composite and
    /// compared by normalized name key. Shared by every operation that
    /// looks employees up, including message creation's referential check.
    pub(crate) fn find_employee_index(&self, key: &str) -> Option<usize> {
        if ident::is_identifier(key) {
            self.data.employees.iter().position(|e| e.id.0 == key)
        } else {
            let wanted = name_key(key);
            self.data.employees.iter().position(|e| e.name_key() == wanted)
        }
    }

    /// Resolve an employee by exact id or composite name key.
    pub(crate) fn find_employee(&self, key: &str) -> Option<&Employee> {
        self.find_employee_index(key).map(|i| &self.data.employees[i])
    }
}
