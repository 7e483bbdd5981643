//! Defines the endpoint the expense form posts to.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{AppState, Error, app_state::ExpenseTracker, endpoints, expense::form::ExpenseForm};

/// The state needed to submit the expense form.
#[derive(Debug, Clone)]
pub struct SubmitExpenseState {
    /// The tracker holding the expense collection and the edit session.
    pub tracker: Arc<Mutex<ExpenseTracker>>,
}

impl FromRef<AppState> for SubmitExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            tracker: state.tracker.clone(),
        }
    }
}

/// A route handler for the expense form.
///
/// Creates a new expense, or updates the one being edited, depending on
/// the edit session, then redirects to the expenses view.
pub async fn submit_expense_endpoint(
    State(state): State<SubmitExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(error) => {
            tracing::warn!("rejected expense form: {error}");
            return error.into_alert_response();
        }
    };

    let mut tracker = match state.tracker.lock() {
        Ok(tracker) => tracker,
        Err(error) => {
            tracing::error!("could not acquire tracker lock: {error}");
            return Error::TrackerLockError.into_alert_response();
        }
    };

    if let Err(error) = tracker.submit(fields) {
        tracing::error!("could not submit expense: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use tempfile::TempDir;

    use crate::{
        app_state::ExpenseTracker,
        expense::{EditCoordinator, ExpenseRepository, form::ExpenseForm},
        store::ExpenseStore,
    };

    use super::{SubmitExpenseState, submit_expense_endpoint};

    fn get_test_state() -> (SubmitExpenseState, TempDir) {
        let data_dir = tempfile::tempdir().unwrap();
        let store = ExpenseStore::open(data_dir.path()).unwrap();
        let state = SubmitExpenseState {
            tracker: Arc::new(Mutex::new(ExpenseTracker {
                expenses: ExpenseRepository::load(store).unwrap(),
                editor: EditCoordinator::default(),
            })),
        };

        (state, data_dir)
    }

    fn lunch_form() -> ExpenseForm {
        ExpenseForm {
            amount: "12.50".to_owned(),
            category: "food".to_owned(),
            description: "lunch".to_owned(),
            date: "2024-03-01".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let (state, _data_dir) = get_test_state();

        let response = submit_expense_endpoint(State(state.clone()), Form(lunch_form()))
            .await
            .into_response();

        assert_redirects_to_expenses_view(response);

        let tracker = state.tracker.lock().unwrap();
        assert_eq!(tracker.expenses.list().len(), 1);
        assert_eq!(tracker.expenses.list()[0].amount, 12.5);
        assert_eq!(tracker.expenses.list()[0].description, "lunch");
    }

    #[tokio::test]
    async fn submitting_while_editing_updates_the_expense() {
        let (state, _data_dir) = get_test_state();
        let expense = {
            let mut tracker = state.tracker.lock().unwrap();
            let expense = tracker.submit(lunch_form().validate().unwrap()).unwrap();
            let crate::expense::Submitted::Created(expense) = expense else {
                panic!("want a create");
            };
            tracker.editor.begin_edit(expense.clone());
            expense
        };

        let response = submit_expense_endpoint(
            State(state.clone()),
            Form(ExpenseForm {
                amount: "20".to_owned(),
                category: "food".to_owned(),
                description: "lunch2".to_owned(),
                date: "2024-03-01".to_owned(),
            }),
        )
        .await
        .into_response();

        assert_redirects_to_expenses_view(response);

        let tracker = state.tracker.lock().unwrap();
        assert_eq!(tracker.expenses.list().len(), 1);
        let updated = tracker.expenses.get(expense.id).unwrap();
        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.description, "lunch2");
        assert!(tracker.editor.editing().is_none(), "want the session idle");
    }

    #[tokio::test]
    async fn rejects_invalid_amount_without_creating() {
        let (state, _data_dir) = get_test_state();

        let response = submit_expense_endpoint(
            State(state.clone()),
            Form(ExpenseForm {
                amount: "abc".to_owned(),
                ..lunch_form()
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.tracker.lock().unwrap().expenses.list().is_empty());
    }

    #[tokio::test]
    async fn rejects_unparsable_date_without_creating() {
        let (state, _data_dir) = get_test_state();

        let response = submit_expense_endpoint(
            State(state.clone()),
            Form(ExpenseForm {
                date: "01/03/2024".to_owned(),
                ..lunch_form()
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.tracker.lock().unwrap().expenses.list().is_empty());
    }

    #[track_caller]
    fn assert_redirects_to_expenses_view(response: Response<Body>) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location, "/expenses",
            "got redirect to {location:?}, want redirect to /expenses"
        );
    }
}
