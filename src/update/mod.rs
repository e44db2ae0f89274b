//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod geometry;
mod layout;
mod pointer;

use crate::commands::Cmd;
use crate::messages::{Msg, PointerMsg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use geometry::update_geometry;
pub use layout::update_layout;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Geometry(m) => geometry::update_geometry(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Hover moves arrive constantly and change nothing
    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }))
        && !model.workspace.is_dragging();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_workspace(&model.workspace);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_workspace(&model.workspace);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.workspace.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Pointer::Down { x: 10.0, y: 20.0 }`
/// - `Layout::RemovePanel(PanelId(3))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Geometry(m) => format!("Geometry::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
