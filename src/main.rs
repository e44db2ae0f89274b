use anyhow::{anyhow, Context, Result};
use clap::Parser;

use dockspace::cli::{CliArgs, ScriptedDrag};
use dockspace::messages::Msg;
use dockspace::model::{AppModel, Orientation, Workspace};
use dockspace::runtime::EventQueue;

fn main() -> Result<()> {
    dockspace::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    let workspace = Workspace::from_decl(&startup.layout, &startup.config)
        .context("Failed to build workspace")?;
    let mut model = AppModel::with_workspace(workspace, startup.config);
    let mut queue = EventQueue::new();

    for drag in &startup.drags {
        run_drag(&mut model, &mut queue, *drag)?;
    }

    if startup.json {
        let report = model.workspace.report();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&model.workspace);
    }

    Ok(())
}

/// Press on a divider, move to the target coordinate and release, one tick each
fn run_drag(model: &mut AppModel, queue: &mut EventQueue, drag: ScriptedDrag) -> Result<()> {
    let divider = *model
        .workspace
        .divider(drag.divider)
        .with_context(|| format!("No divider {}", drag.divider))?;

    let rect = divider.rect;
    let (cx, cy) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    let (tx, ty) = match divider.drag_orientation() {
        Orientation::Horizontal => (drag.coord, cy),
        Orientation::Vertical => (cx, drag.coord),
    };

    for msg in [
        Msg::pointer_down(cx, cy),
        Msg::pointer_move(tx, ty),
        Msg::pointer_up(tx, ty),
    ] {
        queue.push(msg);
        for cmd in queue.tick(model) {
            if let Some(err) = cmd.errors().first() {
                return Err(anyhow!("Drag on divider {} failed: {}", drag.divider, err));
            }
        }
    }

    tracing::info!(divider = drag.divider, coord = drag.coord, "scripted drag done");
    Ok(())
}

fn print_summary(workspace: &Workspace) {
    let container = workspace.container();
    println!("container {}x{}", container.width, container.height);

    for panel in workspace.panels() {
        let r = panel.rect;
        println!(
            "  panel {:>2} {:<12} x={:<8.1} y={:<8.1} w={:<8.1} h={:<8.1}",
            panel.id.0,
            panel.kind.display_name(),
            r.x,
            r.y,
            r.width,
            r.height
        );
    }

    for (i, divider) in workspace.dividers().iter().enumerate() {
        println!(
            "  divider {:>2} {:?} group={} after child {} at {:.1}",
            i,
            divider.direction,
            divider.group.0,
            divider.index,
            divider.position()
        );
    }

    for (id, vp) in workspace.viewport_rects() {
        println!(
            "  camera {:>2} x={:.3} y={:.3} w={:.3} h={:.3}",
            id.0, vp.x, vp.y, vp.width, vp.height
        );
    }
}
