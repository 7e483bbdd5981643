//! Alert partials for surfacing errors without leaving the page.
//!
//! Forms and buttons that talk to the API set
//! `hx-target-error="#alert-container"`, so an error response body
//! rendered with [render_error_alert] lands in the alert container of
//! the page shell.

use axum::{http::StatusCode, response::Response};
use maud::{Markup, html};

use crate::html::render;

/// A dismissible error box with a headline and optional details.
pub fn error_alert(message: &str, details: &str) -> Markup {
    html!(
        div class="alert alert-error" role="alert"
        {
            strong { (message) }

            @if !details.is_empty() {
                p { (details) }
            }
        }
    )
}

/// Send an error alert as a response with the given status code.
pub fn render_error_alert(status_code: StatusCode, message: &str, details: &str) -> Response {
    render(status_code, error_alert(message, details))
}
