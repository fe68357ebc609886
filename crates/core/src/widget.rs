//! Widget entity model and DTOs.
//!
//! A widget is a rectangle with a position, a size and a unique draw rank
//! (`z`). Only the store assigns `id` and `last_modification`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Rank, Timestamp, WidgetId};

/// Message returned when a create or full update omits position or size.
pub const MISSING_PARAMS_MESSAGE: &str = "Request missing required params";

/// A stored widget, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    pub x: i32,
    pub y: i32,
    pub z: Rank,
    pub width: i32,
    pub height: i32,
    pub last_modification: Timestamp,
}

impl Widget {
    /// Overlay `patch` on top of this widget.
    ///
    /// A field takes the patch value when present and keeps the current value
    /// otherwise. `id` and `last_modification` always come from `self`; the
    /// store stamps the new modification time afterwards.
    pub fn merge(&self, patch: &WidgetPatch) -> Widget {
        Widget {
            id: self.id.clone(),
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            z: patch.z.unwrap_or(self.z),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            last_modification: self.last_modification,
        }
    }
}

/// Store input for creating a widget. `z: None` places it in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewWidget {
    pub x: i32,
    pub y: i32,
    pub z: Option<Rank>,
    pub width: i32,
    pub height: i32,
}

/// Store input for updating a widget. `None` leaves the field unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<Rank>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// DTO for creating a widget. Client-sent `id` / `lastModification` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWidget {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<Rank>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl CreateWidget {
    /// Require position and size; `z` stays optional.
    pub fn into_new_widget(self) -> Result<NewWidget, CoreError> {
        match (self.x, self.y, self.width, self.height) {
            (Some(x), Some(y), Some(width), Some(height)) => Ok(NewWidget {
                x,
                y,
                z: self.z,
                width,
                height,
            }),
            _ => Err(CoreError::Validation(MISSING_PARAMS_MESSAGE.to_string())),
        }
    }
}

/// DTO for updating a widget. `id`, when sent, must match the path id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWidget {
    pub id: Option<WidgetId>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<Rank>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl UpdateWidget {
    /// Partial update: every field is optional.
    pub fn into_patch(self) -> WidgetPatch {
        WidgetPatch {
            x: self.x,
            y: self.y,
            z: self.z,
            width: self.width,
            height: self.height,
        }
    }

    /// Full update: position and size must all be present.
    pub fn into_full_patch(self) -> Result<WidgetPatch, CoreError> {
        if self.x.is_none() || self.y.is_none() || self.width.is_none() || self.height.is_none() {
            return Err(CoreError::Validation(MISSING_PARAMS_MESSAGE.to_string()));
        }
        Ok(self.into_patch())
    }
}
