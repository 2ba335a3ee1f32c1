//! Pointer drag of wall items.
//!
//! One item at a time: `press` grabs it, each `pointer_move` yields the new
//! percentage position, `release` lets go.

use serde::{Deserialize, Serialize};

use lovewall_common::ItemId;

use crate::items::ItemKind;

/// Item kinds that can be dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Note,
    Photo,
    Video,
}

impl From<DragKind> for ItemKind {
    fn from(kind: DragKind) -> Self {
        match kind {
            DragKind::Note => ItemKind::Note,
            DragKind::Photo => ItemKind::Photo,
            DragKind::Video => ItemKind::Video,
        }
    }
}

impl TryFrom<ItemKind> for DragKind {
    type Error = ItemKind;

    fn try_from(kind: ItemKind) -> Result<Self, Self::Error> {
        match kind {
            ItemKind::Note => Ok(DragKind::Note),
            ItemKind::Photo => Ok(DragKind::Photo),
            ItemKind::Video => Ok(DragKind::Video),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragTarget {
    pub id: ItemId,
    pub kind: DragKind,
}

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// A position update to apply to the dragged item.
#[derive(Debug, Clone, PartialEq)]
pub struct DragMove {
    pub target: DragTarget,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct DragController {
    target: Option<DragTarget>,
    grab_offset: f64,
}

impl DragController {
    pub fn new(grab_offset: f64) -> Self {
        Self {
            target: None,
            grab_offset,
        }
    }

    /// Grab an item, replacing any current target.
    pub fn press(&mut self, kind: DragKind, id: ItemId) {
        self.target = Some(DragTarget { id, kind });
    }

    pub fn pointer_move(&self, pointer: Pointer, viewport: Viewport) -> Option<DragMove> {
        let target = self.target.as_ref()?;
        let (x, y) = normalize(pointer, viewport, self.grab_offset)?;
        Some(DragMove {
            target: target.clone(),
            x,
            y,
        })
    }

    pub fn release(&mut self) -> Option<DragTarget> {
        self.target.take()
    }

    pub fn target(&self) -> Option<&DragTarget> {
        self.target.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.target.is_some()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Pointer pixels to wall percentages, shifted by the grab offset.
/// `None` for a degenerate viewport or a non-finite pointer.
pub fn normalize(pointer: Pointer, viewport: Viewport, offset: f64) -> Option<(f64, f64)> {
    let extent = |v: f64| v.is_finite() && v > 0.0;
    if !extent(viewport.width) || !extent(viewport.height) {
        return None;
    }
    if !pointer.client_x.is_finite() || !pointer.client_y.is_finite() {
        return None;
    }
    Some((
        pointer.client_x / viewport.width * 100.0 - offset,
        pointer.client_y / viewport.height * 100.0 - offset,
    ))
}
