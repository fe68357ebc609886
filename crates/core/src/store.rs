//! In-memory ordered keyed store for widgets.
//!
//! Widgets are kept in two views over the same set:
//!
//! - a key index (`id -> Widget`) that owns every record and gives O(1)
//!   point lookup;
//! - an ordered sequence of ids sorted ascending by rank, supporting binary
//!   search and positional insert/remove.
//!
//! Inserting at an occupied rank pushes every widget from that rank upward
//! by one. Deleting never renumbers, so gaps may appear.
//!
//! [`OrderedWidgets`] is the plain data structure. [`WidgetStore`] wraps it
//! in a single async mutex together with the identifier source and clock;
//! every operation, reads included, runs inside that one critical section
//! because a single insert can rewrite the rank of an unbounded suffix.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::id::{IdSource, UuidIdSource};
use crate::types::{Rank, Timestamp, WidgetId};
use crate::widget::{NewWidget, Widget, WidgetPatch};

/// Entity name used in not-found errors.
pub const WIDGET_ENTITY: &str = "Widget";

/// Outcome of a binary search by rank over the ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankSearch {
    /// A widget already holds the rank, at this position.
    Found(usize),
    /// No widget holds the rank; this is the sorted insertion point.
    InsertAt(usize),
}

// ---------------------------------------------------------------------------
// OrderedWidgets
// ---------------------------------------------------------------------------

/// Rank-ordered widget collection with an id index.
///
/// Not synchronized. Any disagreement between the two views is a bug and
/// panics.
#[derive(Debug, Default)]
pub struct OrderedWidgets {
    widgets: HashMap<WidgetId, Widget>,
    order: Vec<WidgetId>,
}

impl OrderedWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.get(id)
    }

    /// Highest rank currently stored.
    pub fn max_rank(&self) -> Option<Rank> {
        self.order.last().map(|id| self.rank_of(id))
    }

    /// Rank a widget created without an explicit `z` receives.
    pub fn foreground(&self) -> Result<Rank, CoreError> {
        match self.max_rank() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or_else(rank_overflow),
        }
    }

    /// Widgets in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Widget> + '_ {
        self.order.iter().map(move |id| self.widget(id))
    }

    /// Up to `page_size` widgets starting at position `offset`.
    pub fn page(&self, page_size: usize, offset: usize) -> Vec<Widget> {
        self.iter().skip(offset).take(page_size).cloned().collect()
    }

    pub fn search_rank(&self, z: Rank) -> RankSearch {
        match self.order.binary_search_by(|id| self.rank_of(id).cmp(&z)) {
            Ok(pos) => RankSearch::Found(pos),
            Err(pos) => RankSearch::InsertAt(pos),
        }
    }

    /// Insert-with-shift.
    ///
    /// If `widget.z` is taken, the widget goes in front of the current holder
    /// and every widget from there to the end of the sequence moves up by
    /// exactly one rank. Otherwise it lands at its sorted position and
    /// nothing moves. Fails without mutating if the shift would push the top
    /// rank past `Rank::MAX`.
    pub fn insert(&mut self, widget: Widget) -> Result<(), CoreError> {
        assert!(
            !self.widgets.contains_key(&widget.id),
            "widget {} is already stored",
            widget.id
        );

        match self.search_rank(widget.z) {
            RankSearch::Found(pos) => {
                if self.max_rank() == Some(Rank::MAX) {
                    return Err(rank_overflow());
                }
                self.order.insert(pos, widget.id.clone());
                for id in &self.order[pos + 1..] {
                    let shifted = self
                        .widgets
                        .get_mut(id)
                        .unwrap_or_else(|| panic!("ordered sequence references unknown widget {id}"));
                    shifted.z += 1;
                }
            }
            RankSearch::InsertAt(pos) => self.order.insert(pos, widget.id.clone()),
        }

        self.widgets.insert(widget.id.clone(), widget);
        Ok(())
    }

    /// Remove a widget from both views. Remaining ranks are left as they are.
    pub fn remove(&mut self, id: &str) -> Option<Widget> {
        let z = self.widgets.get(id)?.z;
        let pos = self.position_of(id, z);
        self.order.remove(pos);
        self.widgets.remove(id)
    }

    /// Assign a fresh identity and timestamp to `new` and insert it.
    ///
    /// A missing `z` means foreground placement.
    pub fn create(
        &mut self,
        new: NewWidget,
        id: WidgetId,
        now: Timestamp,
    ) -> Result<Widget, CoreError> {
        let z = match new.z {
            Some(z) => z,
            None => self.foreground()?,
        };
        let widget = Widget {
            id,
            x: new.x,
            y: new.y,
            z,
            width: new.width,
            height: new.height,
            last_modification: now,
        };
        self.insert(widget.clone())?;
        Ok(widget)
    }

    /// Merge `patch` onto the widget `id` and stamp it with `now`.
    ///
    /// Same rank: the record is replaced where it stands. New rank: the
    /// record is taken out and re-inserted with shift. On rank overflow the
    /// original record is restored and the store is left unchanged.
    pub fn update(
        &mut self,
        id: &str,
        patch: &WidgetPatch,
        now: Timestamp,
    ) -> Result<Widget, CoreError> {
        let current = self.widgets.get(id).ok_or_else(|| CoreError::NotFound {
            entity: WIDGET_ENTITY,
            id: id.to_string(),
        })?;
        let current_z = current.z;

        let mut merged = current.merge(patch);
        merged.last_modification = now.max(current.last_modification);

        if merged.z == current_z {
            self.widgets.insert(merged.id.clone(), merged.clone());
            return Ok(merged);
        }

        let previous = self
            .remove(id)
            .unwrap_or_else(|| panic!("widget {id} vanished during update"));
        if let Err(err) = self.insert(merged.clone()) {
            // The old rank was freed by the removal, so this never shifts.
            self.insert(previous)?;
            return Err(err);
        }
        Ok(merged)
    }

    fn widget(&self, id: &str) -> &Widget {
        self.widgets
            .get(id)
            .unwrap_or_else(|| panic!("ordered sequence references unknown widget {id}"))
    }

    fn rank_of(&self, id: &str) -> Rank {
        self.widget(id).z
    }

    fn position_of(&self, id: &str, z: Rank) -> usize {
        match self.search_rank(z) {
            RankSearch::Found(pos) if self.order[pos] == id => pos,
            _ => panic!("widget {id} at rank {z} is missing from the ordered sequence"),
        }
    }
}

fn rank_overflow() -> CoreError {
    CoreError::Conflict(format!("Rank would exceed the maximum of {}", Rank::MAX))
}

// ---------------------------------------------------------------------------
// WidgetStore
// ---------------------------------------------------------------------------

/// Thread-safe widget store shared across request handlers.
///
/// Every operation holds the single internal lock for its whole duration.
/// Widgets handed out are owned snapshots; changing them has no effect on
/// the store.
pub struct WidgetStore {
    widgets: Mutex<OrderedWidgets>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl WidgetStore {
    /// Store backed by random UUIDs and the system clock.
    pub fn new() -> Self {
        Self::with_sources(UuidIdSource, SystemClock)
    }

    pub fn with_sources(ids: impl IdSource + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            widgets: Mutex::new(OrderedWidgets::new()),
            ids: Box::new(ids),
            clock: Box::new(clock),
        }
    }

    pub async fn create(&self, new: NewWidget) -> Result<Widget, CoreError> {
        let mut widgets = self.widgets.lock().await;
        let id = self.ids.next_id();
        widgets.create(new, id, self.clock.now())
    }

    pub async fn get(&self, id: &str) -> Option<Widget> {
        self.widgets.lock().await.get(id).cloned()
    }

    pub async fn list(&self, page_size: usize, offset: usize) -> Vec<Widget> {
        self.widgets.lock().await.page(page_size, offset)
    }

    pub async fn update(&self, id: &str, patch: WidgetPatch) -> Result<Widget, CoreError> {
        let mut widgets = self.widgets.lock().await;
        widgets.update(id, &patch, self.clock.now())
    }

    /// Returns whether the widget existed.
    pub async fn delete(&self, id: &str) -> bool {
        self.widgets.lock().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.widgets.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.widgets.lock().await.is_empty()
    }

    pub async fn max_rank(&self) -> Option<Rank> {
        self.widgets.lock().await.max_rank()
    }
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
