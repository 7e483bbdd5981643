//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        begin_edit_endpoint, cancel_edit_endpoint, delete_expense_endpoint, get_expenses_page,
        list_expenses_endpoint, submit_expense_endpoint,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(begin_edit_endpoint))
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint).post(submit_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_expenses() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::EXPENSES_VIEW);
    }
}
