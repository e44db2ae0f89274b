//! Divider registry and overlay geometry
//!
//! Dividers are not part of the layout tree. Each one names a boundary by
//! (group id, index of the child it follows) and is rebuilt whenever the tree
//! shape changes. Their rectangles are a pure projection of tree geometry.

use serde::Serialize;

use super::error::LayoutError;
use super::node::{Axis, Group, GroupId, LayoutNode, Orientation, Rect};

/// Default thickness of a divider's draw/hit rectangle
pub const DIVIDER_THICKNESS: f32 = 11.0;

/// Orientation of the drawn divider line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DividerDirection {
    /// Vertical line between side-by-side children; dragging moves along x
    Vertical,
    /// Horizontal line between stacked children; dragging moves along y
    Horizontal,
}

impl DividerDirection {
    /// Direction of dividers between children of a group with `axis`
    pub fn for_axis(axis: Axis) -> Self {
        match axis.orientation() {
            Orientation::Horizontal => DividerDirection::Vertical,
            Orientation::Vertical => DividerDirection::Horizontal,
        }
    }

    /// Geometric axis a drag on this divider resizes along
    pub fn drag_orientation(self) -> Orientation {
        match self {
            DividerDirection::Vertical => Orientation::Horizontal,
            DividerDirection::Horizontal => Orientation::Vertical,
        }
    }
}

/// A draggable boundary between two adjacent children of a group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Divider {
    /// Group owning both neighbors
    pub group: GroupId,
    /// Index of the child this divider follows
    pub index: usize,
    pub direction: DividerDirection,
    /// Owning group lays out in reverse visual order
    pub reversed: bool,
    /// Draw and hit-test rectangle
    pub rect: Rect,
}

impl Divider {
    pub fn drag_orientation(&self) -> Orientation {
        self.direction.drag_orientation()
    }

    /// Coordinate of the boundary along the drag axis
    pub fn position(&self) -> f32 {
        let o = self.drag_orientation();
        self.rect.start(o) + self.rect.extent(o) / 2.0
    }
}

/// Build one divider per boundary between adjacent children, depth-first.
///
/// Nested groups register their own boundaries before the parent's boundary
/// that follows them.
pub fn build_dividers(root: &Group) -> Vec<Divider> {
    let mut dividers = Vec::new();
    collect_dividers(root, &mut dividers);
    dividers
}

fn collect_dividers(group: &Group, out: &mut Vec<Divider>) {
    let direction = DividerDirection::for_axis(group.axis);
    let last = group.child_count() - 1;

    for (i, child) in group.children().iter().enumerate() {
        if let LayoutNode::Group(inner) = child {
            collect_dividers(inner, out);
        }

        if i < last && child.has_resizable_content() {
            out.push(Divider {
                group: group.id,
                index: i,
                direction,
                reversed: group.axis.is_reversed(),
                rect: Rect::default(),
            });
        }
    }
}

/// Expected divider count: one per adjacent pair with resizable content before it
pub fn expected_divider_count(root: &Group) -> usize {
    root.groups()
        .iter()
        .map(|g| {
            g.children()
                .iter()
                .take(g.child_count().saturating_sub(1))
                .filter(|c| c.has_resizable_content())
                .count()
        })
        .sum()
}

/// Recompute every divider's rectangle from current tree geometry
pub fn reflow_dividers(
    root: &Group,
    dividers: &mut [Divider],
    thickness: f32,
) -> Result<(), LayoutError> {
    for (index, divider) in dividers.iter_mut().enumerate() {
        let group = root
            .find_group(divider.group)
            .ok_or(LayoutError::StaleDivider { index })?;
        divider.rect = divider_rect(group, divider.index, thickness)
            .ok_or(LayoutError::StaleDivider { index })?;
    }
    Ok(())
}

/// Rectangle straddling the boundary after child `index` of `group`.
///
/// Spans the full cross extent of the group.
pub fn divider_rect(group: &Group, index: usize, thickness: f32) -> Option<Rect> {
    let children = group.children();
    let before = children.get(index)?.rect();
    let after = children.get(index + 1)?.rect();
    let o = group.axis.orientation();

    let boundary = if group.axis.is_reversed() {
        (before.start(o) + after.end(o)) / 2.0
    } else {
        (before.end(o) + after.start(o)) / 2.0
    };

    let cross = o.cross();
    Some(Rect::from_spans(
        o,
        (boundary - thickness / 2.0, thickness),
        (group.rect.start(cross), group.rect.extent(cross)),
    ))
}
