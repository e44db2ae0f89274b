//! Layout error types

use thiserror::Error;

use super::node::{GroupId, PanelId};

/// Errors reported by workspace operations.
///
/// Structural errors refuse the offending call and leave the workspace unchanged.
/// Clamped resizes are never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A group was declared without children
    #[error("group must contain at least one child")]
    EmptyGroup,

    /// The root of the tree must be a group
    #[error("workspace root must be a group, found a panel")]
    RootNotGroup,

    /// A second drag was started while one is active
    #[error("a divider drag is already active")]
    DragAlreadyActive,

    /// A drag update or end arrived with no active drag
    #[error("no divider drag is active")]
    NoActiveDrag,

    /// The tree cannot be edited while a divider is being dragged
    #[error("cannot edit the layout tree while a divider drag is active")]
    DragInProgress,

    /// A divider no longer matches the tree it was built from
    #[error("divider {index} does not match the current tree")]
    StaleDivider { index: usize },

    /// An axis name outside row/row-reverse/column/column-reverse
    #[error("unknown stacking axis: {0:?} (expected row, row-reverse, column or column-reverse)")]
    UnknownAxis(String),

    /// No group with this id exists
    #[error("group {0:?} not found")]
    UnknownGroup(GroupId),

    /// No panel with this id exists
    #[error("panel {0:?} not found")]
    UnknownPanel(PanelId),

    /// Insert position past the end of the group
    #[error("insert index {index} out of bounds for group with {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Removing this panel would leave the workspace empty
    #[error("cannot remove the last panel of the workspace")]
    RemoveLastPanel,

    /// Every slice render layer is in use
    #[error("no free render layer for slice view (layers {min}..={max} in use)")]
    NoFreeLayer { min: u32, max: u32 },
}
