//! Route definitions for donations.

use axum::routing::get;
use axum::Router;

use crate::handlers::donation;
use crate::state::AppState;

/// Donation routes mounted at `/donations`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donation::list).post(donation::create))
        .route(
            "/{id}",
            get(donation::get_by_id)
                .put(donation::update)
                .delete(donation::delete),
        )
}
