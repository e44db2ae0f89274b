//! Application model - the complete state of the workspace
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod composition;
pub mod divider;
pub mod drag;
pub mod error;
pub mod layout;
pub mod node;
pub mod solver;
pub mod viewport;
pub mod workspace;

pub use composition::{LayoutDecl, PanelDecl, PanelRole};
pub use divider::{Divider, DividerDirection, DIVIDER_THICKNESS};
pub use drag::{DragSession, Side};
pub use error::LayoutError;
pub use node::{Axis, Group, GroupId, LayoutNode, Orientation, Panel, PanelId, Rect, Size};
pub use solver::SolveStep;
pub use viewport::{PanelKind, SliceAxis, ViewportRect};
pub use workspace::{PanelReport, Workspace, WorkspaceReport};

use crate::config::WorkspaceConfig;

/// Pointer state between down and up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Panel the pointer went down on (click candidate)
    pub pressed_panel: Option<PanelId>,
    /// Last known pointer position
    pub position: Option<(f32, f32)>,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Layout tree, dividers and drag session
    pub workspace: Workspace,
    /// Persisted workspace configuration
    pub config: WorkspaceConfig,
    /// Pointer tracking for click detection
    pub pointer: PointerState,
}

impl AppModel {
    /// Create a model with the default composition
    pub fn new(config: WorkspaceConfig) -> Result<Self, LayoutError> {
        let workspace = Workspace::default_composition(&config)?;
        Ok(Self::with_workspace(workspace, config))
    }

    pub fn with_workspace(workspace: Workspace, config: WorkspaceConfig) -> Self {
        Self {
            workspace,
            config,
            pointer: PointerState::default(),
        }
    }
}
