//! Per-frame message queue
//!
//! Messages are consumed synchronously and in arrival order, with one
//! exception: container geometry changes that arrive while a divider is being
//! dragged are held back until the drag ends or the tick runs out. Only the
//! latest held-back rectangle is applied.

use std::collections::VecDeque;

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::update::update;

/// Messages waiting for the next tick
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Msg>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: Msg) {
        self.pending.push_back(msg);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain every pending message through `update`.
    ///
    /// Returns the commands produced, in order. A held-back geometry change
    /// is applied as soon as the drag is over, before the next message runs,
    /// so later presses hit-test against the resized layout. Geometry that
    /// arrives while one is held back replaces it.
    pub fn tick(&mut self, model: &mut AppModel) -> Vec<Cmd> {
        let mut cmds = Vec::new();
        let mut deferred: Option<Msg> = None;
        let mut coalesced = 0usize;

        while let Some(msg) = self.pending.pop_front() {
            if !model.workspace.is_dragging() {
                if let Some(held) = deferred.take() {
                    flush(model, held, &mut coalesced, &mut cmds);
                }
            }
            if msg.is_geometry() && model.workspace.is_dragging() {
                if deferred.replace(msg).is_some() {
                    coalesced += 1;
                }
                continue;
            }
            cmds.extend(update(model, msg));
        }

        if let Some(held) = deferred {
            flush(model, held, &mut coalesced, &mut cmds);
        }

        cmds
    }
}

/// Apply a held-back geometry change
fn flush(model: &mut AppModel, msg: Msg, coalesced: &mut usize, cmds: &mut Vec<Cmd>) {
    debug!(target: "runtime", coalesced = *coalesced, "applying deferred geometry change");
    *coalesced = 0;
    cmds.extend(update(model, msg));
}
