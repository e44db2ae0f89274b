//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockspace::config::WorkspaceConfig;
use dockspace::model::{
    AppModel, Axis, LayoutDecl, PanelDecl, PanelId, PanelRole, Size, Workspace,
};

/// Tolerance for float comparisons on sizes and coordinates
pub const EPS: f32 = 1e-3;

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Config with a fixed container and no default minimum
pub fn test_config(width: f32, height: f32) -> WorkspaceConfig {
    WorkspaceConfig {
        container: Size::new(width, height),
        ..WorkspaceConfig::default()
    }
}

/// A shrinkable perspective panel with the given minimum and initial width
pub fn panel(min_width: f32, width: f32) -> LayoutDecl {
    LayoutDecl::panel(
        PanelDecl::new(PanelRole::Perspective)
            .min(min_width, 0.0)
            .size(width, 0.0),
    )
}

/// A panel with explicit minimum and initial size on both axes
pub fn sized_panel(min: (f32, f32), size: (f32, f32)) -> LayoutDecl {
    LayoutDecl::panel(
        PanelDecl::new(PanelRole::Perspective)
            .min(min.0, min.1)
            .size(size.0, size.1),
    )
}

pub fn workspace(decl: LayoutDecl, width: f32, height: f32) -> Workspace {
    Workspace::from_decl(&decl, &test_config(width, height)).unwrap()
}

/// Row of two 200-wide panels with minimum width 50
pub fn two_panel_row() -> Workspace {
    workspace(
        LayoutDecl::row(vec![panel(50.0, 200.0), panel(50.0, 200.0)]),
        400.0,
        300.0,
    )
}

/// `Row[Column[A, B], C]` in a 400x400 container
pub fn nested_workspace() -> Workspace {
    workspace(
        LayoutDecl::row(vec![
            LayoutDecl::column(vec![
                sized_panel((0.0, 20.0), (200.0, 200.0)),
                sized_panel((0.0, 20.0), (200.0, 200.0)),
            ]),
            sized_panel((0.0, 0.0), (200.0, 400.0)),
        ]),
        400.0,
        400.0,
    )
}

/// Same shape as `two_panel_row` but in a reversed row
pub fn reversed_row() -> Workspace {
    workspace(
        LayoutDecl::group(
            Axis::RowReverse,
            vec![panel(50.0, 200.0), panel(50.0, 200.0)],
        ),
        400.0,
        300.0,
    )
}

pub fn default_model() -> AppModel {
    AppModel::new(test_config(1280.0, 720.0)).unwrap()
}

pub fn model_with(workspace: Workspace) -> AppModel {
    AppModel::with_workspace(workspace, WorkspaceConfig::default())
}

pub fn width_of(ws: &Workspace, id: PanelId) -> f32 {
    ws.panel(id).unwrap().size.width
}

pub fn height_of(ws: &Workspace, id: PanelId) -> f32 {
    ws.panel(id).unwrap().size.height
}

/// Center of divider `index`, for pointer events
pub fn divider_center(ws: &Workspace, index: usize) -> (f32, f32) {
    let r = ws.divider(index).unwrap().rect;
    (r.x + r.width / 2.0, r.y + r.height / 2.0)
}
