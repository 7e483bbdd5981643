//! Defines the endpoints that start and cancel an edit session.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, app_state::ExpenseTracker, endpoints, expense::core::ExpenseId};

/// The state needed to start or cancel an edit session.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The tracker holding the expense collection and the edit session.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler that loads an expense into the edit session and sends
/// the user back to the form, which now renders in edit mode.
pub async fn begin_edit_endpoint(
    State(state): State<EditExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Redirect, Error> {
    let mut tracker = state.tracker.lock().map_err(|error| {
        tracing::error!("could not acquire tracker lock: {error}");
        Error::TrackerLockError
    })?;

    let Some(expense) = tracker.expenses.get(expense_id).cloned() else {
        return Err(Error::NotFound);
    };
    tracker.editor.begin_edit(expense);

    Ok(Redirect::to(endpoints::EXPENSES_VIEW))
}

/// A route handler that abandons the edit session and returns the form
/// to create mode.
pub async fn cancel_edit_endpoint(State(state): State<EditExpenseState>) -> Response {
    match state.tracker.lock() {
        Ok(mut tracker) => {
            tracker.editor.cancel();

            (
                HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not acquire tracker lock: {error}");
            Error::TrackerLockError.into_alert_response()
        }
    }
}
