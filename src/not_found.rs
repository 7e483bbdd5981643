//! The 404 page served for unknown routes and missing expenses.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// The fallback route handler for unknown paths.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A response with the 404 page.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Whatever you were looking for does not exist.",
            "Check the address, or head back to your expenses.",
        ),
    )
}
