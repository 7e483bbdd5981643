//! Defines the endpoint for deleting an expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, alert::render_error_alert, app_state::ExpenseTracker, endpoints,
    expense::core::ExpenseId,
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The tracker holding the expense collection.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler for deleting an expense, redirects to the expenses
/// view on success.
///
/// Deleting an expense that no longer exists responds with a benign
/// alert rather than an error page.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let mut tracker = match state.tracker.lock() {
        Ok(tracker) => tracker,
        Err(error) => {
            tracing::error!("could not acquire tracker lock: {error}");
            return Error::TrackerLockError.into_alert_response();
        }
    };

    match tracker.expenses.remove(expense_id) {
        Ok(true) => (
            HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(false) => render_error_alert(
            StatusCode::NOT_FOUND,
            "Could not delete expense",
            "The expense could not be found. \
            Try refreshing the page to see if it has already been deleted.",
        ),
        Err(error) => {
            tracing::error!("could not delete expense {expense_id}: {error}");
            error.into_alert_response()
        }
    }
}
