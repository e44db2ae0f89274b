//! Drag session and neighbor resolution
//!
//! When a divider is grabbed we walk the subtrees on either side of it and
//! collect every panel whose edge touches the boundary. Those panels resize
//! together for the rest of the drag.

use super::divider::Divider;
use super::error::LayoutError;
use super::node::{Group, LayoutNode, Orientation, PanelId};

/// Which side of the divider a panel sits on, in adjacency order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Before the divider (left or top when not reversed)
    Leading,
    /// After the divider
    Trailing,
}

/// State for an in-progress divider drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Index of the dragged divider in the workspace registry
    pub divider_index: usize,
    pub divider: Divider,
    /// Panels that grow when the divider moves forward
    pub leading: Vec<PanelId>,
    /// Panels that shrink when the divider moves forward
    pub trailing: Vec<PanelId>,
}

impl DragSession {
    /// Resolve the panels coupled to `divider` in `root`
    pub fn resolve(
        root: &Group,
        divider_index: usize,
        divider: Divider,
    ) -> Result<Self, LayoutError> {
        let stale = LayoutError::StaleDivider {
            index: divider_index,
        };
        let group = root.find_group(divider.group).ok_or(stale.clone())?;
        let before = group.children().get(divider.index).ok_or(stale.clone())?;
        let after = group.children().get(divider.index + 1).ok_or(stale)?;

        let drag = divider.drag_orientation();
        let mut leading = Vec::new();
        let mut trailing = Vec::new();
        collect_edge_panels(before, Side::Leading, drag, divider.reversed, &mut leading);
        collect_edge_panels(after, Side::Trailing, drag, divider.reversed, &mut trailing);

        Ok(Self {
            divider_index,
            divider,
            leading,
            trailing,
        })
    }

    pub fn drag_orientation(&self) -> Orientation {
        self.divider.drag_orientation()
    }

    /// Whether `panel` resizes with this drag
    pub fn involves(&self, panel: PanelId) -> bool {
        self.leading.contains(&panel) || self.trailing.contains(&panel)
    }
}

/// Collect the panels of `node` whose edge lies on the dragged boundary.
///
/// A group stacked along the drag axis only touches the boundary with one
/// child; a group stacked across it touches the boundary with all of them.
pub fn collect_edge_panels(
    node: &LayoutNode,
    side: Side,
    drag: Orientation,
    divider_reversed: bool,
    out: &mut Vec<PanelId>,
) {
    match node {
        LayoutNode::Panel(panel) => out.push(panel.id),
        LayoutNode::Group(group) if group.axis.orientation() == drag => {
            if let Some(child) = edge_child(group, side, divider_reversed) {
                collect_edge_panels(child, side, drag, divider_reversed, out);
            }
        }
        LayoutNode::Group(group) => {
            for child in group.children() {
                collect_edge_panels(child, side, drag, divider_reversed, out);
            }
        }
    }
}

/// The child of a same-axis group that sits against the boundary.
///
/// Leading subtrees touch the boundary with their last child and trailing
/// subtrees with their first, unless the subtree runs in the opposite visual
/// direction to the divider's group.
fn edge_child(group: &Group, side: Side, divider_reversed: bool) -> Option<&LayoutNode> {
    let same_direction = group.axis.is_reversed() == divider_reversed;
    let take_last = match side {
        Side::Leading => same_direction,
        Side::Trailing => !same_direction,
    };
    if take_last {
        group.children().last()
    } else {
        group.children().first()
    }
}
