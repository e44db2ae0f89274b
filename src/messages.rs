//! Message types for the Elm-style architecture
//!
//! All state changes flow through these messages. The host translates raw
//! window events into `Msg` values and pushes them onto the event queue.

use crate::model::{GroupId, PanelDecl, PanelId, Rect};

/// Pointer input in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Primary button pressed
    Down { x: f32, y: f32 },
    /// Pointer moved (with or without a button held)
    Move { x: f32, y: f32 },
    /// Primary button released
    Up { x: f32, y: f32 },
    /// Pointer capture lost (focus change, window hidden)
    Cancel,
}

/// Host geometry changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryMsg {
    /// The workspace container got a new rectangle
    ContainerResized(Rect),
}

/// Layout tree and panel state edits
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Insert a new panel into a group at a child index
    InsertPanel {
        group: GroupId,
        index: usize,
        panel: PanelDecl,
    },
    /// Remove a panel (and any group it leaves empty)
    RemovePanel(PanelId),
    /// Give focus to a panel
    FocusPanel(PanelId),
    /// Move a slice view's plane, in -0.5..=0.5
    SetSlicePosition { panel: PanelId, position: f32 },
    /// Rebuild the divider registry from the current tree
    RebuildDividers,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Geometry(GeometryMsg),
    Layout(LayoutMsg),
}

impl Msg {
    /// Geometry messages are coalesced while a drag is active
    pub fn is_geometry(&self) -> bool {
        matches!(self, Msg::Geometry(_))
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Down { x, y })
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Move { x, y })
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Up { x, y })
    }

    pub fn resized(rect: Rect) -> Self {
        Msg::Geometry(GeometryMsg::ContainerResized(rect))
    }
}
