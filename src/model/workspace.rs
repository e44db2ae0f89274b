//! Workspace - the layout tree, its divider registry and the active drag
//!
//! A single workspace is created by the host and passed around explicitly.
//! It is the only owner of panel sizes: the resize solver mutates them during
//! a drag, the layout pass re-validates them when the container changes.

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::composition::{LayoutDecl, PanelDecl, PanelRole};
use super::divider::{build_dividers, expected_divider_count, reflow_dividers, Divider};
use super::drag::DragSession;
use super::error::LayoutError;
use super::layout::layout_group;
use super::node::{Group, GroupId, LayoutNode, Panel, PanelId, Rect, Size};
use super::solver::{self, EdgeSample, SolveStep};
use super::viewport::{clamp_slice_position, LayerAllocator, PanelKind, ViewportRect};
use crate::config::WorkspaceConfig;

// ============================================================================
// Node Factory
// ============================================================================

/// Assigns ids and render layers to declared nodes
#[derive(Debug, Clone)]
struct NodeFactory {
    next_group_id: u64,
    next_panel_id: u64,
    layers: LayerAllocator,
    default_min_size: f32,
}

impl NodeFactory {
    fn new(default_min_size: f32) -> Self {
        Self {
            next_group_id: 1,
            next_panel_id: 1,
            layers: LayerAllocator::new(),
            default_min_size,
        }
    }

    fn build_group(&mut self, decl: &LayoutDecl) -> Result<Group, LayoutError> {
        match decl {
            LayoutDecl::Group { axis, children } => {
                let id = GroupId(self.next_group_id);
                self.next_group_id += 1;
                let children = children
                    .iter()
                    .map(|child| self.build_node(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Group::new(id, *axis, children)
            }
            LayoutDecl::Panel(_) => Err(LayoutError::RootNotGroup),
        }
    }

    fn build_node(&mut self, decl: &LayoutDecl) -> Result<LayoutNode, LayoutError> {
        match decl {
            LayoutDecl::Group { .. } => self.build_group(decl).map(LayoutNode::Group),
            LayoutDecl::Panel(panel) => self.build_panel(panel).map(LayoutNode::Panel),
        }
    }

    fn build_panel(&mut self, decl: &PanelDecl) -> Result<Panel, LayoutError> {
        let kind = match (decl.role, decl.role.slice_axis()) {
            (_, Some(axis)) => PanelKind::Slice {
                axis,
                layer: self.layers.allocate()?,
                position: 0.0,
            },
            (PanelRole::Perspective, None) => PanelKind::Perspective,
            (_, None) => PanelKind::Inspector,
        };

        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;

        let min = Size::new(
            decl.min_width.unwrap_or(self.default_min_size),
            decl.min_height.unwrap_or(self.default_min_size),
        );
        let mut panel = Panel::new(id, kind, min);
        panel.size = Size::new(
            decl.width.max(panel.min_size.width),
            decl.height.max(panel.min_size.height),
        );
        panel.shrinkable = decl
            .shrinkable
            .unwrap_or_else(|| decl.role.default_shrinkable());
        Ok(panel)
    }

    fn release(&mut self, panel: &Panel) {
        if let PanelKind::Slice { layer, .. } = panel.kind {
            self.layers.release(layer);
        }
    }
}

// ============================================================================
// Workspace
// ============================================================================

/// The dockable panel workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    root: Group,
    dividers: Vec<Divider>,
    drag: Option<DragSession>,
    container: Rect,
    divider_thickness: f32,
    focused: Option<PanelId>,
    factory: NodeFactory,
}

impl Workspace {
    /// Build a workspace from a declared tree and lay it out in the
    /// configured container.
    pub fn from_decl(decl: &LayoutDecl, config: &WorkspaceConfig) -> Result<Self, LayoutError> {
        let mut factory = NodeFactory::new(config.default_min_size);
        let root = factory.build_group(decl)?;

        let mut workspace = Self {
            root,
            dividers: Vec::new(),
            drag: None,
            container: Rect::new(0.0, 0.0, config.container.width, config.container.height),
            divider_thickness: config.divider_thickness,
            focused: None,
            factory,
        };
        workspace.rebuild_dividers();
        workspace.relayout()?;
        Ok(workspace)
    }

    /// The standard slice/perspective/inspector workspace
    pub fn default_composition(config: &WorkspaceConfig) -> Result<Self, LayoutError> {
        Self::from_decl(&LayoutDecl::default_composition(), config)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    pub fn divider(&self, index: usize) -> Option<&Divider> {
        self.dividers.get(index)
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.root.find_panel(id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.root.find_group(id)
    }

    /// All panels in depth-first order
    pub fn panels(&self) -> Vec<&Panel> {
        self.root.panels()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.root.panels().iter().map(|p| p.id).collect()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn focused_panel(&self) -> Option<PanelId> {
        self.focused
    }

    /// Render layers currently handed out to slice views
    pub fn layers_in_use(&self) -> usize {
        self.factory.layers.in_use()
    }

    /// Find the panel under a point
    pub fn panel_at_point(&self, x: f32, y: f32) -> Option<PanelId> {
        self.root
            .panels()
            .iter()
            .find(|p| p.rect.contains(x, y))
            .map(|p| p.id)
    }

    /// Find the divider under a point (for drag handling)
    pub fn divider_at_point(&self, x: f32, y: f32) -> Option<usize> {
        self.dividers.iter().position(|d| d.rect.contains(x, y))
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    /// Rebuild the divider registry from the tree shape
    pub fn rebuild_dividers(&mut self) {
        self.dividers = build_dividers(&self.root);
        debug!(target: "layout", dividers = self.dividers.len(), "rebuilt dividers");
    }

    /// The host resized the container
    pub fn resize_container(&mut self, rect: Rect) -> Result<(), LayoutError> {
        debug!(
            target: "layout",
            width = rect.width,
            height = rect.height,
            dragging = self.is_dragging(),
            "container resized"
        );
        self.container = rect;
        self.relayout()
    }

    /// Recompute every node rectangle and then every divider rectangle
    pub fn relayout(&mut self) -> Result<(), LayoutError> {
        layout_group(&mut self.root, self.container);
        self.reflow()
    }

    /// Recompute divider rectangles from current geometry
    pub fn reflow(&mut self) -> Result<(), LayoutError> {
        reflow_dividers(&self.root, &mut self.dividers, self.divider_thickness)
    }

    /// Normalized camera rectangles of all viewport panels
    pub fn viewport_rects(&self) -> Vec<(PanelId, ViewportRect)> {
        let screen = Size::new(self.container.width, self.container.height);
        self.root
            .panels()
            .iter()
            .filter(|p| p.kind.is_viewport())
            .filter_map(|p| ViewportRect::for_panel(p.rect, screen).map(|vp| (p.id, vp)))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Drag Session
    // ------------------------------------------------------------------------

    /// Start dragging the divider at `index`.
    ///
    /// Only one drag may be active; a second start is refused.
    pub fn begin_drag(&mut self, index: usize) -> Result<&DragSession, LayoutError> {
        if self.drag.is_some() {
            warn!(target: "drag", index, "refused drag start: a drag is already active");
            return Err(LayoutError::DragAlreadyActive);
        }

        let divider = *self
            .dividers
            .get(index)
            .ok_or(LayoutError::StaleDivider { index })?;
        let session = DragSession::resolve(&self.root, index, divider)?;

        debug!(
            target: "drag",
            index,
            direction = ?divider.direction,
            leading = ?session.leading,
            trailing = ?session.trailing,
            "drag started"
        );
        Ok(self.drag.insert(session))
    }

    /// Move the active divider towards `pointer` (a coordinate on its drag axis)
    pub fn drag_to(&mut self, pointer: f32) -> Result<SolveStep, LayoutError> {
        let session = self.drag.as_ref().ok_or(LayoutError::NoActiveDrag)?;
        let o = session.drag_orientation();

        let sample = |id: PanelId| -> Result<EdgeSample, LayoutError> {
            let panel = self.root.find_panel(id).ok_or(LayoutError::UnknownPanel(id))?;
            Ok(EdgeSample {
                start: panel.rect.start(o),
                end: panel.rect.end(o),
                size: panel.size.along(o),
                min: panel.min_size.along(o),
            })
        };
        let leading = session
            .leading
            .iter()
            .map(|&id| sample(id))
            .collect::<Result<Vec<_>, _>>()?;
        let trailing = session
            .trailing
            .iter()
            .map(|&id| sample(id))
            .collect::<Result<Vec<_>, _>>()?;

        let step = solver::solve(&leading, &trailing, pointer, session.divider.reversed);
        trace!(
            target: "drag",
            pointer,
            requested = step.requested,
            applied = step.applied,
            clamped = step.is_clamped(),
            "drag step"
        );

        if step.applied != 0.0 {
            let (leading, trailing) = (session.leading.clone(), session.trailing.clone());
            for (ids, delta) in [(leading, step.applied), (trailing, -step.applied)] {
                for id in ids {
                    if let Some(panel) = self.root.find_panel_mut(id) {
                        let size = solver::apply(
                            panel.size.along(o),
                            panel.min_size.along(o),
                            delta,
                        );
                        panel.size.set_along(o, size);
                    }
                }
            }
            self.relayout()?;
        }

        Ok(step)
    }

    /// Release the divider and recompute all divider rectangles
    pub fn end_drag(&mut self) -> Result<DragSession, LayoutError> {
        let session = self.drag.take().ok_or(LayoutError::NoActiveDrag)?;
        self.relayout()?;
        debug!(target: "drag", index = session.divider_index, "drag ended");
        Ok(session)
    }

    // ------------------------------------------------------------------------
    // Tree Edits
    // ------------------------------------------------------------------------

    /// Insert a new panel into `group` at `index`
    pub fn insert_panel(
        &mut self,
        group: GroupId,
        index: usize,
        decl: &PanelDecl,
    ) -> Result<PanelId, LayoutError> {
        if self.is_dragging() {
            return Err(LayoutError::DragInProgress);
        }

        let target = self
            .root
            .find_group(group)
            .ok_or(LayoutError::UnknownGroup(group))?;
        let len = target.child_count();
        if index > len {
            return Err(LayoutError::IndexOutOfBounds { index, len });
        }
        let o = target.axis.orientation();
        let even_share = target.rect.extent(o) / (len + 1) as f32;

        let mut panel = self.factory.build_panel(decl)?;
        if decl.width <= 0.0 && decl.height <= 0.0 {
            let share = even_share.max(panel.min_size.along(o));
            panel.size.set_along(o, share);
        }
        let id = panel.id;

        let target = self
            .root
            .find_group_mut(group)
            .ok_or(LayoutError::UnknownGroup(group))?;
        target.children_mut().insert(index, LayoutNode::Panel(panel));

        debug!(target: "layout", ?id, ?group, index, "inserted panel");
        self.rebuild_dividers();
        self.relayout()?;
        Ok(id)
    }

    /// Remove a panel; groups left empty are removed with it
    pub fn remove_panel(&mut self, id: PanelId) -> Result<(), LayoutError> {
        if self.is_dragging() {
            return Err(LayoutError::DragInProgress);
        }
        if self.root.find_panel(id).is_none() {
            return Err(LayoutError::UnknownPanel(id));
        }
        if self.root.panels().len() <= 1 {
            return Err(LayoutError::RemoveLastPanel);
        }

        let panel = take_panel(&mut self.root, id).ok_or(LayoutError::UnknownPanel(id))?;
        self.factory.release(&panel);
        if self.focused == Some(id) {
            self.focused = None;
        }

        debug!(target: "layout", ?id, "removed panel");
        self.rebuild_dividers();
        self.relayout()
    }

    /// Give focus to a panel
    pub fn focus_panel(&mut self, id: PanelId) -> Result<(), LayoutError> {
        if self.root.find_panel(id).is_none() {
            return Err(LayoutError::UnknownPanel(id));
        }
        self.focused = Some(id);
        Ok(())
    }

    /// Move a slice view's plane; other panel kinds ignore this
    pub fn set_slice_position(&mut self, id: PanelId, value: f32) -> Result<(), LayoutError> {
        let panel = self
            .root
            .find_panel_mut(id)
            .ok_or(LayoutError::UnknownPanel(id))?;
        match &mut panel.kind {
            PanelKind::Slice { position, .. } => *position = clamp_slice_position(value),
            other => debug!(target: "layout", ?id, kind = other.display_name(), "not a slice view"),
        }
        Ok(())
    }

    /// Geometry snapshot for the host or for debugging
    pub fn report(&self) -> WorkspaceReport {
        WorkspaceReport {
            container: self.container,
            panels: self
                .root
                .panels()
                .iter()
                .map(|p| PanelReport {
                    id: p.id,
                    name: p.kind.display_name(),
                    rect: p.rect,
                    min_size: p.min_size,
                })
                .collect(),
            dividers: self.dividers.clone(),
        }
    }
}

/// Detach a panel from the tree, dropping groups it leaves empty
fn take_panel(group: &mut Group, id: PanelId) -> Option<Panel> {
    let children = group.children_mut();

    if let Some(pos) = children
        .iter()
        .position(|c| matches!(c, LayoutNode::Panel(p) if p.id == id))
    {
        return match children.remove(pos) {
            LayoutNode::Panel(panel) => Some(panel),
            LayoutNode::Group(_) => None,
        };
    }

    for i in 0..children.len() {
        let (found, emptied) = match &mut children[i] {
            LayoutNode::Group(inner) => match take_panel(inner, id) {
                Some(panel) => (Some(panel), inner.child_count() == 0),
                None => (None, false),
            },
            LayoutNode::Panel(_) => (None, false),
        };
        if let Some(panel) = found {
            if emptied {
                children.remove(i);
            }
            return Some(panel);
        }
    }
    None
}

/// Serializable geometry snapshot
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceReport {
    pub container: Rect,
    pub panels: Vec<PanelReport>,
    pub dividers: Vec<Divider>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub id: PanelId,
    pub name: &'static str,
    pub rect: Rect,
    pub min_size: Size,
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

/// Tolerance for float drift in size checks
const SIZE_EPSILON: f32 = 1e-3;

impl Workspace {
    /// Validate internal invariants in debug builds.
    ///
    /// This function checks that:
    /// - every group has at least one child
    /// - there is exactly one divider per resizable boundary
    /// - every panel is at least its minimum size on both axes
    /// - the drag session only references existing panels
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for group in self.root.groups() {
            assert!(group.child_count() > 0, "Group {:?} has no children", group.id);
        }

        assert_eq!(
            self.dividers.len(),
            expected_divider_count(&self.root),
            "Divider registry out of sync with tree"
        );

        for panel in self.root.panels() {
            assert!(
                panel.size.width + SIZE_EPSILON >= panel.min_size.width
                    && panel.size.height + SIZE_EPSILON >= panel.min_size.height,
                "Panel {:?} size {:?} below minimum {:?}",
                panel.id,
                panel.size,
                panel.min_size
            );
        }

        if let Some(session) = &self.drag {
            for id in session.leading.iter().chain(&session.trailing) {
                assert!(
                    self.root.find_panel(*id).is_some(),
                    "Drag session references missing panel {:?}",
                    id
                );
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
