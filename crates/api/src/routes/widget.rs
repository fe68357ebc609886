//! Route definitions for the widget resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::widget;
use crate::state::AppState;

/// Widget routes, mounted under `/api/v1`.
///
/// ```text
/// GET    /widgets           -> list
/// POST   /widgets           -> create
/// GET    /widget/{id}       -> get_by_id
/// PUT    /widget/{id}       -> update
/// PATCH  /widget/{id}       -> patch
/// DELETE /widget/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/widgets", get(widget::list).post(widget::create))
        .route(
            "/widget/{id}",
            get(widget::get_by_id)
                .put(widget::update)
                .patch(widget::patch)
                .delete(widget::delete),
        )
}
