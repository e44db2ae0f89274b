//! Layout tree - groups that stack children along an axis, and resizable panels
//!
//! The tree is strictly owned: every node lives inside exactly one parent group,
//! so sharing and cycles are impossible by construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::viewport::PanelKind;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a group node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u64);

/// Unique identifier for a panel node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u64);

// ============================================================================
// Geometry Primitives
// ============================================================================

/// Geometric axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along x
    Horizontal,
    /// Along y
    Vertical,
}

impl Orientation {
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Rectangle in world units, origin at the top-left
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Leading coordinate along `o` (left or top edge)
    pub fn start(&self, o: Orientation) -> f32 {
        match o {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Trailing coordinate along `o` (right or bottom edge)
    pub fn end(&self, o: Orientation) -> f32 {
        self.start(o) + self.extent(o)
    }

    pub fn extent(&self, o: Orientation) -> f32 {
        match o {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Build a rect from main-axis and cross-axis spans
    pub fn from_spans(o: Orientation, main: (f32, f32), cross: (f32, f32)) -> Self {
        match o {
            Orientation::Horizontal => Rect::new(main.0, cross.0, main.1, cross.1),
            Orientation::Vertical => Rect::new(cross.0, main.0, cross.1, main.1),
        }
    }
}

/// Width and height pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(&self, o: Orientation) -> f32 {
        match o {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    pub fn set_along(&mut self, o: Orientation, value: f32) {
        match o {
            Orientation::Horizontal => self.width = value,
            Orientation::Vertical => self.height = value,
        }
    }
}

// ============================================================================
// Stacking Axis
// ============================================================================

/// Direction a group stacks its children in.
///
/// The reversed variants only change visual order; adjacency always follows
/// the order of `Group::children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Axis {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl Axis {
    /// Geometric axis children are laid out along
    pub fn orientation(self) -> Orientation {
        match self {
            Axis::Row | Axis::RowReverse => Orientation::Horizontal,
            Axis::Column | Axis::ColumnReverse => Orientation::Vertical,
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Axis::RowReverse | Axis::ColumnReverse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::RowReverse => "row-reverse",
            Axis::Column => "column",
            Axis::ColumnReverse => "column-reverse",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "row" => Ok(Axis::Row),
            "row-reverse" => Ok(Axis::RowReverse),
            "column" => Ok(Axis::Column),
            "column-reverse" => Ok(Axis::ColumnReverse),
            _ => Err(LayoutError::UnknownAxis(s.to_string())),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.as_str().to_string()
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A leaf: a resizable content region
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    pub min_size: Size,
    /// Current size, written only by the resize solver and the layout pass
    pub size: Size,
    /// World rectangle from the last layout pass
    pub rect: Rect,
    /// Non-shrinkable panels keep their share when the container changes size
    pub shrinkable: bool,
}

impl Panel {
    pub fn new(id: PanelId, kind: PanelKind, min_size: Size) -> Self {
        let min_size = Size::new(min_size.width.max(0.0), min_size.height.max(0.0));
        Self {
            id,
            kind,
            min_size,
            size: min_size,
            rect: Rect::default(),
            shrinkable: true,
        }
    }
}

/// A container stacking its children along one axis
#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    pub axis: Axis,
    children: Vec<LayoutNode>,
    /// World rectangle from the last layout pass
    pub rect: Rect,
}

impl Group {
    /// Create a group; a group without children is refused
    pub fn new(id: GroupId, axis: Axis, children: Vec<LayoutNode>) -> Result<Self, LayoutError> {
        if children.is_empty() {
            return Err(LayoutError::EmptyGroup);
        }
        Ok(Self {
            id,
            axis,
            children,
            rect: Rect::default(),
        })
    }

    /// Children in adjacency order
    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<LayoutNode> {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Depth-first search for a group (including this one)
    pub fn find_group(&self, id: GroupId) -> Option<&Group> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            LayoutNode::Group(g) => g.find_group(id),
            LayoutNode::Panel(_) => None,
        })
    }

    pub fn find_group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            LayoutNode::Group(g) => g.find_group_mut(id),
            LayoutNode::Panel(_) => None,
        })
    }

    pub fn find_panel(&self, id: PanelId) -> Option<&Panel> {
        self.children.iter().find_map(|child| child.find_panel(id))
    }

    pub fn find_panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.children.iter_mut().find_map(|child| child.find_panel_mut(id))
    }

    /// All panels in depth-first order
    pub fn panels(&self) -> Vec<&Panel> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_panels(&mut out);
        }
        out
    }

    /// All groups (including this one) in pre-order
    pub fn groups(&self) -> Vec<&Group> {
        let mut out = vec![self];
        for child in &self.children {
            if let LayoutNode::Group(g) = child {
                out.extend(g.groups());
            }
        }
        out
    }
}

/// A node in the layout tree
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Group(Group),
    Panel(Panel),
}

impl LayoutNode {
    pub fn is_group(&self) -> bool {
        matches!(self, LayoutNode::Group(_))
    }

    pub fn is_panel(&self) -> bool {
        matches!(self, LayoutNode::Panel(_))
    }

    pub fn rect(&self) -> Rect {
        match self {
            LayoutNode::Group(g) => g.rect,
            LayoutNode::Panel(p) => p.rect,
        }
    }

    /// Whether a divider next to this node has anything to resize
    pub fn has_resizable_content(&self) -> bool {
        match self {
            LayoutNode::Panel(_) => true,
            LayoutNode::Group(g) => g.children.iter().any(LayoutNode::has_resizable_content),
        }
    }

    /// Extent this node asks for along `o`, derived from panel sizes
    pub fn preferred_extent(&self, o: Orientation) -> f32 {
        match self {
            LayoutNode::Panel(p) => p.size.along(o).max(p.min_size.along(o)),
            LayoutNode::Group(g) => {
                let extents = g.children.iter().map(|c| c.preferred_extent(o));
                if g.axis.orientation() == o {
                    extents.sum()
                } else {
                    extents.fold(0.0, f32::max)
                }
            }
        }
    }

    /// Smallest extent this node can take along `o`
    pub fn min_extent(&self, o: Orientation) -> f32 {
        match self {
            LayoutNode::Panel(p) => p.min_size.along(o),
            LayoutNode::Group(g) => {
                let mins = g.children.iter().map(|c| c.min_extent(o));
                if g.axis.orientation() == o {
                    mins.sum()
                } else {
                    mins.fold(0.0, f32::max)
                }
            }
        }
    }

    /// Fixed nodes keep their preferred extent during container reflow
    pub fn is_fixed(&self) -> bool {
        match self {
            LayoutNode::Panel(p) => !p.shrinkable,
            LayoutNode::Group(_) => false,
        }
    }

    pub fn find_panel(&self, id: PanelId) -> Option<&Panel> {
        match self {
            LayoutNode::Panel(p) if p.id == id => Some(p),
            LayoutNode::Panel(_) => None,
            LayoutNode::Group(g) => g.find_panel(id),
        }
    }

    pub fn find_panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        match self {
            LayoutNode::Panel(p) if p.id == id => Some(p),
            LayoutNode::Panel(_) => None,
            LayoutNode::Group(g) => g.find_panel_mut(id),
        }
    }

    fn collect_panels<'a>(&'a self, out: &mut Vec<&'a Panel>) {
        match self {
            LayoutNode::Panel(p) => out.push(p),
            LayoutNode::Group(g) => {
                for child in &g.children {
                    child.collect_panels(out);
                }
            }
        }
    }
}
