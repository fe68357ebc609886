/// Widget identifiers are opaque strings issued by an [`IdSource`](crate::id::IdSource).
pub type WidgetId = String;

/// Draw rank along the z axis. Unique among live widgets.
pub type Rank = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
