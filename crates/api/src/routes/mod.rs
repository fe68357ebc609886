pub mod health;
pub mod widget;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /widgets                                         list, create
/// /widget/{id}                                     get, full update, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(widget::router())
}
