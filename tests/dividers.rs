//! Tests for the divider registry and reflow

mod common;

use common::{assert_close, default_model, nested_workspace, panel, two_panel_row, workspace};
use dockspace::model::{
    Axis, DividerDirection, GroupId, LayoutDecl, LayoutError, DIVIDER_THICKNESS,
};

// ============================================================================
// Registry Shape
// ============================================================================

#[test]
fn test_one_divider_between_two_panels() {
    let ws = two_panel_row();
    assert_eq!(ws.dividers().len(), 1);

    let divider = ws.divider(0).unwrap();
    assert_eq!(divider.group, GroupId(1));
    assert_eq!(divider.index, 0);
    assert_eq!(divider.direction, DividerDirection::Vertical);
    assert!(!divider.reversed);
}

#[test]
fn test_single_child_group_has_no_dividers() {
    let ws = workspace(LayoutDecl::row(vec![panel(0.0, 100.0)]), 400.0, 300.0);
    assert!(ws.dividers().is_empty());
}

#[test]
fn test_default_composition_registry() {
    let model = default_model();
    let ws = &model.workspace;

    let directions: Vec<_> = ws.dividers().iter().map(|d| d.direction).collect();
    assert_eq!(
        directions,
        vec![
            DividerDirection::Horizontal,
            DividerDirection::Vertical,
            DividerDirection::Horizontal,
            DividerDirection::Vertical,
        ]
    );

    // Nothing follows the inspector
    let root = ws.root().id;
    let root_indices: Vec<_> = ws
        .dividers()
        .iter()
        .filter(|d| d.group == root)
        .map(|d| d.index)
        .collect();
    assert_eq!(root_indices, vec![0, 1]);
}

#[test]
fn test_column_group_gets_horizontal_dividers() {
    let ws = workspace(
        LayoutDecl::group(
            Axis::ColumnReverse,
            vec![panel(0.0, 0.0), panel(0.0, 0.0), panel(0.0, 0.0)],
        ),
        300.0,
        300.0,
    );
    assert_eq!(ws.dividers().len(), 2);
    assert!(ws
        .dividers()
        .iter()
        .all(|d| d.direction == DividerDirection::Horizontal && d.reversed));
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_divider_rect_straddles_boundary() {
    let model = default_model();
    let ws = &model.workspace;

    // Columns split 1000 evenly next to the 280 inspector
    let vertical = ws.divider(1).unwrap();
    assert_close(vertical.position(), 500.0);
    assert_close(vertical.rect.x, 500.0 - DIVIDER_THICKNESS / 2.0);
    assert_close(vertical.rect.width, DIVIDER_THICKNESS);
    assert_close(vertical.rect.y, 0.0);
    assert_close(vertical.rect.height, 720.0);

    // The nested divider spans only its own column
    let horizontal = ws.divider(0).unwrap();
    assert_close(horizontal.position(), 360.0);
    assert_close(horizontal.rect.x, 0.0);
    assert_close(horizontal.rect.width, 500.0);
    assert_close(horizontal.rect.height, DIVIDER_THICKNESS);

    assert_close(ws.divider(3).unwrap().position(), 1000.0);
}

#[test]
fn test_reflow_is_idempotent() {
    let mut ws = nested_workspace();
    ws.reflow().unwrap();
    let first = ws.dividers().to_vec();
    ws.reflow().unwrap();
    assert_eq!(ws.dividers(), first.as_slice());
}

#[test]
fn test_dividers_follow_panels_after_drag() {
    let mut ws = nested_workspace();
    ws.begin_drag(1).unwrap();
    ws.drag_to(260.0).unwrap();

    // The nested divider's span shrinks with its column
    let nested = ws.divider(0).unwrap();
    assert_close(nested.rect.width, 260.0);
    assert_close(ws.divider(1).unwrap().position(), 260.0);
}

#[test]
fn test_divider_hit_testing() {
    let ws = two_panel_row();
    assert_eq!(ws.divider_at_point(200.0, 10.0), Some(0));
    assert_eq!(ws.divider_at_point(203.0, 290.0), Some(0));
    assert_eq!(ws.divider_at_point(150.0, 10.0), None);
}

#[test]
fn test_rebuild_after_edit_keeps_count_in_sync() {
    let mut ws = nested_workspace();
    assert_eq!(ws.dividers().len(), 2);

    ws.remove_panel(dockspace::model::PanelId(2)).unwrap();
    assert_eq!(ws.dividers().len(), 1);
    ws.assert_invariants();
}

#[test]
fn test_stale_registry_is_reported() {
    let mut ws = nested_workspace();
    ws.remove_panel(dockspace::model::PanelId(1)).unwrap();
    ws.remove_panel(dockspace::model::PanelId(2)).unwrap();

    // Registry was rebuilt on each edit, so reflow still succeeds
    assert!(ws.reflow().is_ok());
    assert!(ws.dividers().is_empty());
    assert_eq!(
        ws.begin_drag(0).unwrap_err(),
        LayoutError::StaleDivider { index: 0 }
    );
}
