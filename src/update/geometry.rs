//! Container geometry handlers

use crate::commands::Cmd;
use crate::messages::GeometryMsg;
use crate::model::AppModel;

/// Handle host geometry changes
pub fn update_geometry(model: &mut AppModel, msg: GeometryMsg) -> Option<Cmd> {
    match msg {
        GeometryMsg::ContainerResized(rect) => {
            if rect == model.workspace.container() {
                return None;
            }
            match model.workspace.resize_container(rect) {
                Ok(()) => Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::SyncViewports(model.workspace.viewport_rects()),
                ])),
                Err(err) => Some(Cmd::ReportError(err)),
            }
        }
    }
}
