//! Commands and damage tracking
//!
//! Update functions return commands describing the side effects the host
//! should perform: repaint, move viewport cameras, forward clicks, or
//! surface an error.

use crate::model::{LayoutError, PanelId, ViewportRect};

// ============================================================================
// Damage Tracking
// ============================================================================

/// A region of the workspace that needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageArea {
    /// A single panel's content
    Panel(PanelId),
    /// The divider handles
    Dividers,
}

/// Accumulated repaint request for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Damage {
    #[default]
    None,
    /// Repaint everything
    Full,
    /// Repaint only these areas
    Areas(Vec<DamageArea>),
}

impl Damage {
    /// Merge another damage into this one
    ///
    /// Full absorbs everything; None is the identity.
    pub fn merge(&mut self, other: Damage) {
        match (&mut *self, other) {
            (_, Damage::None) => {}
            (Damage::None, other) => *self = other,
            (Damage::Full, _) => {}
            (this, Damage::Full) => *this = Damage::Full,
            (Damage::Areas(areas), Damage::Areas(other_areas)) => {
                for area in other_areas {
                    if !areas.contains(&area) {
                        areas.push(area);
                    }
                }
            }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Damage::Full)
    }

    /// Check if this damage includes a panel (or is full)
    pub fn includes_panel(&self, panel: PanelId) -> bool {
        match self {
            Damage::None => false,
            Damage::Full => true,
            Damage::Areas(areas) => areas.contains(&DamageArea::Panel(panel)),
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Damage::None => false,
            Damage::Full => true,
            Damage::Areas(areas) => !areas.is_empty(),
        }
    }
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Repaint the whole workspace
    Redraw,
    /// Repaint only the given areas
    RedrawAreas(Vec<DamageArea>),
    /// Move viewport cameras to new normalized rectangles
    SyncViewports(Vec<(PanelId, ViewportRect)>),
    /// A click landed on a panel; position is normalized to its rect
    ForwardClick {
        panel: PanelId,
        position: (f32, f32),
    },
    /// An operation was refused
    ReportError(LayoutError),
    /// Multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Flatten a list of commands, dropping `None`
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Repaint damage implied by this command
    pub fn damage(&self) -> Damage {
        match self {
            Cmd::Redraw => Damage::Full,
            Cmd::RedrawAreas(areas) => Damage::Areas(areas.clone()),
            Cmd::Batch(cmds) => {
                let mut damage = Damage::None;
                for cmd in cmds {
                    damage.merge(cmd.damage());
                    if damage.is_full() {
                        break;
                    }
                }
                damage
            }
            Cmd::None | Cmd::SyncViewports(_) | Cmd::ForwardClick { .. } | Cmd::ReportError(_) => {
                Damage::None
            }
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.damage().needs_redraw()
    }

    /// Every command in this tree, batches flattened
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Errors carried by this command tree
    pub fn errors(&self) -> Vec<&LayoutError> {
        match self {
            Cmd::ReportError(err) => vec![err],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::errors).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

impl From<LayoutError> for Cmd {
    fn from(err: LayoutError) -> Self {
        Cmd::ReportError(err)
    }
}
