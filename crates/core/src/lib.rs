//! Domain layer for the widget service.
//!
//! Holds the widget model, the collaborator traits the store consumes
//! (identifier source, clock) and the ordered keyed store itself. Has no
//! knowledge of HTTP.

pub mod clock;
pub mod error;
pub mod id;
pub mod pagination;
pub mod store;
pub mod types;
pub mod widget;
