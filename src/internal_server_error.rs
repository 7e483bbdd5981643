//! The page shown when an unexpected error occurs.

use axum::{http::StatusCode, response::Response};

use crate::html::{error_view, render};

/// The text of the internal server error page.
pub struct InternalServerErrorPage<'a> {
    /// A short description of what went wrong.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl Default for InternalServerErrorPage<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs.",
        }
    }
}

/// A response with the 500 page.
pub fn render_internal_server_error(page: InternalServerErrorPage) -> Response {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Internal Server Error", "500", page.description, page.fix),
    )
}
