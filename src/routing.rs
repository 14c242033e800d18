//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::{
    AppState,
    category::{create_category_endpoint, get_category_options},
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    report::get_report,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_list,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_PARTIAL, get(get_transaction_list))
        .route(endpoints::REPORT_PARTIAL, get(get_report));

    let api_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::CATEGORIES_API, post(create_category_endpoint))
        .route(endpoints::CATEGORY_OPTIONS, get(get_category_options))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint),
        );

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}
