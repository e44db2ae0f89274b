//! Property tests: generated trees, edit streams, drags and resizes never
//! break size or registry invariants.

mod common;

use common::{test_config, EPS};
use dockspace::messages::Msg;
use dockspace::model::divider::expected_divider_count;
use dockspace::model::{
    Axis, Group, LayoutDecl, LayoutError, LayoutNode, Orientation, PanelDecl, PanelRole, Rect,
    Workspace,
};
use dockspace::runtime::EventQueue;
use dockspace::AppModel;
use proptest::prelude::*;

/// Edges of resized panels may drift this far from the divider
const EDGE_TOLERANCE: f32 = 0.05;

/// Default composition with minimums on every viewport
fn constrained_decl() -> LayoutDecl {
    let slice = |role| LayoutDecl::panel(PanelDecl::new(role).min(80.0, 60.0));
    LayoutDecl::row(vec![
        LayoutDecl::column(vec![slice(PanelRole::Axial), slice(PanelRole::Coronal)]),
        LayoutDecl::column(vec![
            slice(PanelRole::Perspective),
            slice(PanelRole::Sagittal),
        ]),
        LayoutDecl::panel(
            PanelDecl::new(PanelRole::Inspector)
                .min(200.0, 0.0)
                .size(280.0, 0.0),
        ),
    ])
}

fn assert_sizes_respect_minimums(ws: &Workspace) {
    for panel in ws.panels() {
        assert!(
            panel.size.width + EPS >= panel.min_size.width,
            "panel {:?} width {} below {}",
            panel.id,
            panel.size.width,
            panel.min_size.width
        );
        assert!(
            panel.size.height + EPS >= panel.min_size.height,
            "panel {:?} height {} below {}",
            panel.id,
            panel.size.height,
            panel.min_size.height
        );
    }
}

/// One divider per adjacent pair of children, summed over every group
fn boundary_count(root: &Group) -> usize {
    root.groups().iter().map(|g| g.child_count() - 1).sum()
}

/// Panels reached by walking the tree, checking each node's kind
fn leaf_count(group: &Group) -> usize {
    group
        .children()
        .iter()
        .map(|child| match child {
            LayoutNode::Group(g) => {
                assert!(child.is_group() && !child.is_panel());
                leaf_count(g)
            }
            LayoutNode::Panel(_) => {
                assert!(child.is_panel() && !child.is_group());
                1
            }
        })
        .sum()
}

fn assert_registry_matches_tree(ws: &Workspace) {
    assert_eq!(ws.dividers().len(), boundary_count(ws.root()));
    assert_eq!(ws.dividers().len(), expected_divider_count(ws.root()));
    assert_eq!(leaf_count(ws.root()), ws.panels().len());
    ws.assert_invariants();
}

// ============================================================================
// Strategies
// ============================================================================

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![
        Just(Axis::Row),
        Just(Axis::RowReverse),
        Just(Axis::Column),
        Just(Axis::ColumnReverse),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = LayoutDecl> {
    (0.0f32..15.0, 0.0f32..15.0, 20.0f32..300.0, 20.0f32..300.0).prop_map(
        |(min_w, min_h, width, height)| {
            LayoutDecl::panel(
                PanelDecl::new(PanelRole::Perspective)
                    .min(min_w, min_h)
                    .size(width, height),
            )
        },
    )
}

/// Nested groups of up to three levels mixing every axis
fn tree_strategy() -> impl Strategy<Value = LayoutDecl> {
    let node = leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        (axis_strategy(), prop::collection::vec(inner, 1..4))
            .prop_map(|(axis, children)| LayoutDecl::group(axis, children))
    });
    (axis_strategy(), prop::collection::vec(node, 1..4))
        .prop_map(|(axis, children)| LayoutDecl::group(axis, children))
}

#[derive(Debug, Clone)]
enum Edit {
    Insert { group: usize, index: usize, min: f32 },
    Remove { panel: usize },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<usize>(), any::<usize>(), 0.0f32..15.0)
            .prop_map(|(group, index, min)| Edit::Insert { group, index, min }),
        any::<usize>().prop_map(|panel| Edit::Remove { panel }),
    ]
}

fn apply_edit(ws: &mut Workspace, edit: &Edit) {
    match *edit {
        Edit::Insert { group, index, min } => {
            let groups = ws.root().groups();
            let target = groups[group % groups.len()];
            let (id, index) = (target.id, index % (target.child_count() + 1));
            let decl = PanelDecl::new(PanelRole::Perspective).min(min, min);
            ws.insert_panel(id, index, &decl).unwrap();
        }
        Edit::Remove { panel } => {
            let ids = ws.panel_ids();
            match ws.remove_panel(ids[panel % ids.len()]) {
                Ok(()) => {}
                Err(LayoutError::RemoveLastPanel) => assert_eq!(ids.len(), 1),
                Err(e) => panic!("unexpected error removing panel: {}", e),
            }
        }
    }
}

/// Every resized panel keeps its boundary edge on the dragged divider
fn assert_edges_on_divider(ws: &Workspace) {
    let session = ws.drag_session().unwrap();
    let o = session.drag_orientation();
    let reversed = session.divider.reversed;
    let position = ws.divider(session.divider_index).unwrap().position();

    for &id in &session.leading {
        let rect = ws.panel(id).unwrap().rect;
        let edge = if reversed { rect.start(o) } else { rect.end(o) };
        assert!(
            (edge - position).abs() < EDGE_TOLERANCE,
            "leading panel {:?} edge {} off divider at {}",
            id,
            edge,
            position
        );
    }
    for &id in &session.trailing {
        let rect = ws.panel(id).unwrap().rect;
        let edge = if reversed { rect.end(o) } else { rect.start(o) };
        assert!(
            (edge - position).abs() < EDGE_TOLERANCE,
            "trailing panel {:?} edge {} off divider at {}",
            id,
            edge,
            position
        );
    }
}

#[derive(Debug, Clone)]
enum Step {
    Drag { divider: usize, pointer: f32 },
    Resize { width: f32, height: f32 },
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0usize..4, -400.0f32..2000.0)
            .prop_map(|(divider, pointer)| Step::Drag { divider, pointer }),
        1 => (100.0f32..2000.0, 100.0f32..1200.0)
            .prop_map(|(width, height)| Step::Resize { width, height }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_trees_have_one_divider_per_boundary(decl in tree_strategy()) {
        let ws = Workspace::from_decl(&decl, &test_config(2400.0, 1800.0)).unwrap();
        assert_registry_matches_tree(&ws);
    }

    #[test]
    fn edit_streams_keep_registry_in_sync(
        decl in tree_strategy(),
        edits in prop::collection::vec(edit_strategy(), 1..16),
    ) {
        let mut ws = Workspace::from_decl(&decl, &test_config(2400.0, 1800.0)).unwrap();
        for edit in &edits {
            apply_edit(&mut ws, edit);
            assert_registry_matches_tree(&ws);
        }
    }

    #[test]
    fn drags_on_generated_trees_keep_edges_on_the_divider(
        decl in tree_strategy(),
        divider in any::<usize>(),
        pointers in prop::collection::vec(-200.0f32..2600.0, 1..12),
    ) {
        let mut ws = Workspace::from_decl(&decl, &test_config(2400.0, 1800.0)).unwrap();
        prop_assume!(!ws.dividers().is_empty());
        let index = divider % ws.dividers().len();

        ws.begin_drag(index).unwrap();
        for pointer in pointers {
            ws.drag_to(pointer).unwrap();
            assert_edges_on_divider(&ws);
            assert_sizes_respect_minimums(&ws);
            ws.assert_invariants();
        }
        ws.end_drag().unwrap();
        assert_registry_matches_tree(&ws);
    }

    #[test]
    fn drag_steps_conserve_extent_and_respect_minimums(
        divider in 0usize..4,
        pointers in prop::collection::vec(-500.0f32..2500.0, 1..40),
    ) {
        let config = test_config(1280.0, 720.0);
        let mut ws = Workspace::from_decl(&constrained_decl(), &config).unwrap();
        let o = ws.divider(divider).unwrap().drag_orientation();
        let session = ws.begin_drag(divider).unwrap().clone();
        let total = |ws: &Workspace| -> f32 {
            session
                .leading
                .iter()
                .take(1)
                .chain(session.trailing.iter().take(1))
                .map(|&id| ws.panel(id).unwrap().size.along(o))
                .sum()
        };
        let before = total(&ws);

        for pointer in pointers {
            ws.drag_to(pointer).unwrap();
            assert_sizes_respect_minimums(&ws);
            prop_assert!((total(&ws) - before).abs() < 0.01);
        }

        ws.end_drag().unwrap();
        prop_assert_eq!(ws.dividers().len(), 4);
        ws.assert_invariants();
    }

    #[test]
    fn queued_streams_keep_invariants(steps in prop::collection::vec(step_strategy(), 1..30)) {
        let config = test_config(1280.0, 720.0);
        let workspace = Workspace::from_decl(&constrained_decl(), &config).unwrap();
        let mut model = AppModel::with_workspace(workspace, config);
        let mut queue = EventQueue::new();

        for step in steps {
            match step {
                Step::Drag { divider, pointer } => {
                    let d = *model.workspace.divider(divider).unwrap();
                    let (cx, cy) = (d.rect.x + d.rect.width / 2.0, d.rect.y + d.rect.height / 2.0);
                    let target = match d.drag_orientation() {
                        Orientation::Horizontal => (pointer, cy),
                        Orientation::Vertical => (cx, pointer),
                    };
                    queue.push(Msg::pointer_down(cx, cy));
                    queue.push(Msg::pointer_move(target.0, target.1));
                    queue.push(Msg::resized(Rect::new(0.0, 0.0, 1100.0, 700.0)));
                    queue.push(Msg::pointer_up(target.0, target.1));
                }
                Step::Resize { width, height } => {
                    queue.push(Msg::resized(Rect::new(0.0, 0.0, width, height)));
                }
            }
            queue.tick(&mut model);

            prop_assert!(!model.workspace.is_dragging());
            prop_assert_eq!(model.workspace.dividers().len(), 4);
            let container = model.workspace.container();
            // Minimums are honoured whenever the container can hold them
            if container.width >= 360.0 && container.height >= 120.0 {
                assert_sizes_respect_minimums(&model.workspace);
            }
            model.workspace.assert_invariants();
        }
    }
}
