//! Handlers for the `/widgets` and `/widget/{id}` resources.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use widget_core::error::CoreError;
use widget_core::pagination::resolve_page;
use widget_core::store::WIDGET_ENTITY;
use widget_core::types::WidgetId;
use widget_core::widget::{CreateWidget, UpdateWidget};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// Public path of a single widget, used for the `Location` header.
pub fn widget_location(id: &str) -> String {
    format!("/api/v1/widget/{id}")
}

fn not_found(id: WidgetId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: WIDGET_ENTITY,
        id,
    })
}

/// Reject a body `id` that disagrees with the path.
fn ensure_matching_id(path_id: &str, input: &UpdateWidget) -> AppResult<()> {
    match input.id.as_deref() {
        Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
            "Widget ID [{body_id}] from request body doesn't match widget ID [{path_id}] from request path"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/widgets
///
/// Create a widget. `x`, `y`, `width` and `height` are required; a missing
/// `z` places the widget in the foreground.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWidget>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new_widget()?;
    let widget = state.store.create(new).await?;
    tracing::info!(id = %widget.id, z = widget.z, "Widget created");

    let location = widget_location(&widget.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(widget)))
}

/// GET /api/v1/widgets?pageSize=&offset=
///
/// List widgets in ascending `z` order. Responds 204 when the page is empty.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let page = resolve_page(
        params.page_size,
        params.offset,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;
    let widgets = state.store.list(page.size, page.offset).await;
    tracing::debug!(count = widgets.len(), offset = page.offset, "Listed widgets");

    if widgets.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(widgets).into_response())
    }
}

/// GET /api/v1/widget/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
) -> AppResult<impl IntoResponse> {
    let widget = state.store.get(&id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(widget))
}

/// PUT /api/v1/widget/{id}
///
/// Full update: position and size are required, `z` is optional.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
    Json(input): Json<UpdateWidget>,
) -> AppResult<impl IntoResponse> {
    ensure_matching_id(&id, &input)?;
    let patch = input.into_full_patch()?;
    let widget = state.store.update(&id, patch).await?;
    tracing::info!(id = %widget.id, z = widget.z, "Widget updated");
    Ok(Json(widget))
}

/// PATCH /api/v1/widget/{id}
///
/// Partial update: only the fields present (and non-null) are changed.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
    Json(input): Json<UpdateWidget>,
) -> AppResult<impl IntoResponse> {
    ensure_matching_id(&id, &input)?;
    let widget = state.store.update(&id, input.into_patch()).await?;
    tracing::info!(id = %widget.id, z = widget.z, "Widget patched");
    Ok(Json(widget))
}

/// DELETE /api/v1/widget/{id}
///
/// Responds 204 when the widget existed and 410 otherwise.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<WidgetId>,
) -> AppResult<StatusCode> {
    if state.store.delete(&id).await {
        tracing::info!(%id, "Widget deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Gone(format!("Widget [{id}] does not exist")))
    }
}
