//! Cents is a web app for tracking personal expenses.
//!
//! Expenses are held in memory and written through to a single JSON file
//! after every change. This library serves the HTML pages and the JSON API
//! for recording, listing and charting them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod chart;
mod endpoints;
mod expense;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod store;
mod timezone;

pub use app_state::{AppState, ExpenseTracker};
pub use chart::{by_category, by_month, total};
pub use expense::{
    EditCoordinator, Expense, ExpenseDraft, ExpenseFields, ExpenseId, ExpenseRepository, SortKey,
    Submitted, distinct_categories, filtered_sorted,
};
pub use routing::build_router;
pub use store::{EXPENSES_SLOT, ExpenseStore};

use crate::{
    alert::render_error_alert,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct and that the resource has been
    /// created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist.
    #[error("tried to update an expense that is not in the tracker")]
    UpdateMissingExpense,

    /// The durable slot holds data that cannot be parsed into expenses.
    ///
    /// This is fatal for the load. The caller decides whether to bail out
    /// or start over with an empty collection; nothing is fabricated or
    /// discarded silently.
    #[error("could not parse the stored expense data: {0}")]
    MalformedStoredData(String),

    /// Reading or writing the durable slot failed at the file level.
    #[error("could not access the expense store: {0}")]
    StoreIo(String),

    /// An error occurred while serializing the expense collection as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The submitted amount is not a non-negative dollar value.
    #[error("\"{0}\" is not a valid dollar amount")]
    InvalidAmount(String),

    /// An empty string was submitted as the expense category.
    #[error("a category must be selected")]
    EmptyCategory,

    /// The submitted date could not be parsed.
    #[error("\"{0}\" is not a valid date in YYYY-MM-DD format")]
    InvalidDate(String),

    /// Could not acquire the expense tracker lock.
    #[error("could not acquire the expense tracker lock")]
    TrackerLockError,

    /// An error occurred while getting the local timezone from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string."
                    ),
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidAmount(_) | Error::EmptyCategory | Error::InvalidDate(_) => {
                render_error_alert(StatusCode::BAD_REQUEST, "Invalid expense", &self.to_string())
            }
            Error::UpdateMissingExpense => render_error_alert(
                StatusCode::NOT_FOUND,
                "Could not update expense",
                "The expense could not be found. \
                Try refreshing the page to see if it has already been deleted.",
            ),
            _ => render_error_alert(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.",
            ),
        }
    }
}
