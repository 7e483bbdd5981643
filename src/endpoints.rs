//! The app's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}/edit',
//! use [format_endpoint].

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The main page: expense form, list and charts.
pub const EXPENSES_VIEW: &str = "/expenses";
/// Begins an edit session for an expense and redirects to the main page.
pub const EDIT_EXPENSE_VIEW: &str = "/expenses/{expense_id}/edit";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to list expenses as JSON (GET) or submit the expense form (POST).
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete an expense.
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to cancel the edit session.
pub const CANCEL_EDIT: &str = "/api/expenses/edit/cancel";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}/edit',
/// '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII
/// characters and a single parameter. If no parameter is found in
/// `endpoint_path`, the function returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
