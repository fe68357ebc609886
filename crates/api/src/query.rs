//! Query parameter types for API handlers.

use serde::Deserialize;

/// Widget list pagination (`?pageSize=&offset=`).
///
/// Values are validated against the configured limits by
/// `widget_core::pagination::resolve_page`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_size: Option<i64>,
    pub offset: Option<i64>,
}
