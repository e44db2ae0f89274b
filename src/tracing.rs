//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag sessions, layout passes, and state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=trace,layout=debug` - scoped filtering
//! - `RUST_LOG=dockspace::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockspace/logs/dockspace.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{PanelId, Size, Workspace};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/dockspace/logs/dockspace.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so `--json` output stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockspace.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A host may have installed its own subscriber already
    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        tracing::debug!("keeping existing tracing subscriber: {}", e);
    }
}

/// Lightweight snapshot of panel sizes for diffing
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    pub dragging: bool,
    pub divider_count: usize,
    pub sizes: Vec<(PanelId, Size)>,
}

impl LayoutSnapshot {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        Self {
            dragging: workspace.is_dragging(),
            divider_count: workspace.dividers().len(),
            sizes: workspace.panels().iter().map(|p| (p.id, p.size)).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }
        if self.divider_count != other.divider_count {
            changes.push(format!(
                "dividers: {} → {}",
                self.divider_count, other.divider_count
            ));
        }
        if self.sizes.len() != other.sizes.len() {
            changes.push(format!(
                "panel count: {} → {}",
                self.sizes.len(),
                other.sizes.len()
            ));
        } else {
            for ((id, before), (_, after)) in self.sizes.iter().zip(&other.sizes) {
                if before != after {
                    changes.push(format!(
                        "#{}: {}x{} → {}x{}",
                        id.0, before.width, before.height, after.width, after.height
                    ));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
