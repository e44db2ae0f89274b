//! Dockspace - dockable panel workspace
//!
//! This crate provides the layout tree, divider registry and constrained
//! resize solver for a dockable panel workspace, driven through the Elm
//! Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkspaceConfig;
pub use messages::Msg;
pub use model::{AppModel, LayoutError, Workspace};
pub use runtime::EventQueue;
