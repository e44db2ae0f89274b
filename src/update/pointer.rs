//! Pointer handlers: divider drags and click passthrough

use crate::commands::{Cmd, DamageArea};
use crate::messages::PointerMsg;
use crate::model::viewport::normalized_click;
use crate::model::{AppModel, Orientation};

/// Handle pointer input
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down { x, y } => {
            model.pointer.position = Some((x, y));
            press(model, x, y)
        }

        PointerMsg::Move { x, y } => {
            model.pointer.position = Some((x, y));
            drag_move(model, x, y)
        }

        PointerMsg::Up { x, y } => {
            model.pointer.position = Some((x, y));
            if model.workspace.is_dragging() {
                model.pointer.pressed_panel = None;
                return release_drag(model);
            }
            click(model, x, y)
        }

        PointerMsg::Cancel => {
            model.pointer.pressed_panel = None;
            if model.workspace.is_dragging() {
                release_drag(model)
            } else {
                None
            }
        }
    }
}

/// Grab a divider, or remember the panel as a click candidate
fn press(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let Some(index) = model.workspace.divider_at_point(x, y) else {
        model.pointer.pressed_panel = model.workspace.panel_at_point(x, y);
        return None;
    };

    match model.workspace.begin_drag(index) {
        Ok(_) => {
            model.pointer.pressed_panel = None;
            Some(Cmd::RedrawAreas(vec![DamageArea::Dividers]))
        }
        Err(err) => Some(Cmd::ReportError(err)),
    }
}

fn drag_move(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let session = model.workspace.drag_session()?;
    let pointer = match session.drag_orientation() {
        Orientation::Horizontal => x,
        Orientation::Vertical => y,
    };
    let mut damage: Vec<DamageArea> = session
        .leading
        .iter()
        .chain(&session.trailing)
        .map(|&id| DamageArea::Panel(id))
        .collect();

    match model.workspace.drag_to(pointer) {
        Ok(step) if step.applied == 0.0 => None,
        Ok(_) => {
            damage.push(DamageArea::Dividers);
            Some(Cmd::batch(vec![
                Cmd::RedrawAreas(damage),
                Cmd::SyncViewports(model.workspace.viewport_rects()),
            ]))
        }
        Err(err) => Some(Cmd::ReportError(err)),
    }
}

fn release_drag(model: &mut AppModel) -> Option<Cmd> {
    match model.workspace.end_drag() {
        Ok(_) => Some(Cmd::batch(vec![
            Cmd::RedrawAreas(vec![DamageArea::Dividers]),
            Cmd::SyncViewports(model.workspace.viewport_rects()),
        ])),
        Err(err) => Some(Cmd::ReportError(err)),
    }
}

/// Down and up on the same panel without a drag in between
fn click(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let pressed = model.pointer.pressed_panel.take()?;
    if model.workspace.panel_at_point(x, y) != Some(pressed) {
        return None;
    }

    let previous = model.workspace.focused_panel();
    if let Err(err) = model.workspace.focus_panel(pressed) {
        return Some(Cmd::ReportError(err));
    }

    let mut damage = vec![DamageArea::Panel(pressed)];
    if let Some(prev) = previous.filter(|&p| p != pressed) {
        damage.push(DamageArea::Panel(prev));
    }

    let forward = model
        .workspace
        .panel(pressed)
        .filter(|p| p.kind.is_viewport())
        .and_then(|p| normalized_click(p.rect, x, y))
        .map(|position| Cmd::ForwardClick {
            panel: pressed,
            position,
        });

    tracing::debug!(target: "input", panel = ?pressed, forwarded = forward.is_some(), "click");

    Some(Cmd::batch(vec![
        Cmd::RedrawAreas(damage),
        forward.unwrap_or_default(),
    ]))
}
