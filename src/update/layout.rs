//! Layout message handlers (tree edits, focus, slice planes)

use crate::commands::{Cmd, DamageArea};
use crate::messages::LayoutMsg;
use crate::model::{AppModel, LayoutError};

/// Handle layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    let result = match msg {
        LayoutMsg::InsertPanel {
            group,
            index,
            panel,
        } => model
            .workspace
            .insert_panel(group, index, &panel)
            .map(|_| structure_changed(model)),

        LayoutMsg::RemovePanel(id) => model
            .workspace
            .remove_panel(id)
            .map(|()| structure_changed(model)),

        LayoutMsg::FocusPanel(id) => {
            let previous = model.workspace.focused_panel();
            model.workspace.focus_panel(id).map(|()| {
                let mut damage = vec![DamageArea::Panel(id)];
                if let Some(prev) = previous.filter(|&p| p != id) {
                    damage.push(DamageArea::Panel(prev));
                }
                Cmd::RedrawAreas(damage)
            })
        }

        LayoutMsg::SetSlicePosition { panel, position } => model
            .workspace
            .set_slice_position(panel, position)
            .map(|()| Cmd::RedrawAreas(vec![DamageArea::Panel(panel)])),

        LayoutMsg::RebuildDividers => rebuild_dividers(model),
    };

    match result {
        Ok(cmd) => Some(cmd),
        Err(err) => {
            tracing::warn!(target: "layout", %err, "layout message refused");
            Some(Cmd::ReportError(err))
        }
    }
}

fn rebuild_dividers(model: &mut AppModel) -> Result<Cmd, LayoutError> {
    if model.workspace.is_dragging() {
        return Err(LayoutError::DragInProgress);
    }
    model.workspace.rebuild_dividers();
    model.workspace.reflow()?;
    Ok(Cmd::RedrawAreas(vec![DamageArea::Dividers]))
}

/// Tree shape changed: repaint everything and move the cameras
fn structure_changed(model: &AppModel) -> Cmd {
    Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::SyncViewports(model.workspace.viewport_rects()),
    ])
}
