//! Defines the endpoint that serves the expense collection as JSON.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{AppState, Error, app_state::ExpenseTracker, expense::core::Expense};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The tracker holding the expense collection.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler that returns the full collection, newest first, in
/// the same shape as the durable slot.
pub async fn list_expenses_endpoint(
    State(state): State<ListExpensesState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let tracker = state.tracker.lock().map_err(|error| {
        tracing::error!("could not acquire tracker lock: {error}");
        Error::TrackerLockError
    })?;

    Ok(Json(tracker.expenses.list().to_vec()))
}
