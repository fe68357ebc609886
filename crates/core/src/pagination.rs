//! Page-size policy for widget listing.
//!
//! The store itself accepts any `(page_size, offset)` pair; these helpers
//! apply the limits the HTTP layer enforces before calling it.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page size used when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 500;

/// A validated page request, ready to hand to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: usize,
    pub offset: usize,
}

/// Resolve optional `pageSize` / `offset` query values into a [`Page`].
///
/// - Missing page size falls back to `default_size`.
/// - Page size must be in `1..=max_size`.
/// - Missing offset means `0`; a negative offset is rejected.
pub fn resolve_page(
    page_size: Option<i64>,
    offset: Option<i64>,
    default_size: i64,
    max_size: i64,
) -> Result<Page, CoreError> {
    let size = page_size.unwrap_or(default_size);
    if size > max_size {
        return Err(CoreError::Validation(format!(
            "Requested page size {size} is more than maximum page size {max_size}"
        )));
    }
    if size < 1 {
        return Err(CoreError::Validation(format!(
            "Requested page size {size} must be at least 1"
        )));
    }

    let offset = offset.unwrap_or(0);
    if offset < 0 {
        return Err(CoreError::Validation(format!(
            "Requested offset {offset} must not be negative"
        )));
    }

    Ok(Page {
        size: size as usize,
        offset: usize::try_from(offset).unwrap_or(usize::MAX),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
