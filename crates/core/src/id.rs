//! Identifier source for newly created widgets.

use crate::types::WidgetId;

/// Issues identifiers that are unique for the lifetime of the process.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> WidgetId;
}

/// Random (v4) UUIDs rendered in their hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> WidgetId {
        uuid::Uuid::new_v4().to_string()
    }
}
