pub mod donation;
pub mod health;

use axum::http::Uri;
use axum::Router;
use donations_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /donations                                       list, create
/// /donations/{id}                                  get, update, delete
/// ```
///
/// Unmatched paths under `/api` answer with the JSON 404 body, so the static
/// UI fallback never shadows them.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/donations", donation::router())
        .fallback(unknown_route)
}

async fn unknown_route(uri: Uri) -> AppError {
    AppError::Core(CoreError::not_found("Route", uri.path()))
}
