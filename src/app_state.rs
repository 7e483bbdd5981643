//! Implements the structs that hold the state of the server.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    expense::{EditCoordinator, ExpenseFields, ExpenseRepository, Submitted},
    store::ExpenseStore,
};

/// The expense repository and the edit session behind a single lock.
///
/// Every read and mutation goes through this container and the
/// operations its parts expose; request handlers never touch the
/// collection directly.
#[derive(Debug)]
pub struct ExpenseTracker {
    /// The in-memory expense collection.
    pub expenses: ExpenseRepository,
    /// The edit session coordinator.
    pub editor: EditCoordinator,
}

impl ExpenseTracker {
    /// Apply a validated form submission: create a new expense while
    /// idle, update the edited one otherwise.
    ///
    /// # Errors
    /// See [EditCoordinator::submit].
    pub fn submit(&mut self, fields: ExpenseFields) -> Result<Submitted, Error> {
        self.editor.submit(fields, &mut self.expenses)
    }
}

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expense tracker shared between request handlers.
    pub tracker: Arc<Mutex<ExpenseTracker>>,

    /// The local timezone as a canonical timezone name, e.g.
    /// "Pacific/Auckland". Decides what "today" means when the form
    /// defaults its date field.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState], loading the expense collection from the
    /// durable slot behind `store`.
    ///
    /// # Errors
    /// Returns an error if the slot exists but cannot be read or parsed.
    pub fn new(store: ExpenseStore, local_timezone: &str) -> Result<Self, Error> {
        let expenses = ExpenseRepository::load(store)?;

        Ok(Self {
            tracker: Arc::new(Mutex::new(ExpenseTracker {
                expenses,
                editor: EditCoordinator::default(),
            })),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
