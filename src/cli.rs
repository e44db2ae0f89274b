//! Command-line argument parsing for the demo host
//!
//! Supports:
//! - Loading a composition from YAML/JSON
//! - Overriding the container size
//! - Scripted divider drags
//! - JSON geometry output

use clap::Parser;
use std::path::PathBuf;

use crate::config::WorkspaceConfig;
use crate::model::{LayoutDecl, Size};

/// Dockable panel workspace driven from the command line
#[derive(Parser, Debug)]
#[command(
    name = "dockspace",
    version,
    about = "Lay out a panel workspace and drag its dividers"
)]
pub struct CliArgs {
    /// Composition file (YAML or JSON); the default workspace otherwise
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Config file instead of ~/.config/dockspace/config.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Container width
    #[arg(long, value_name = "W")]
    pub width: Option<f32>,

    /// Container height
    #[arg(long, value_name = "H")]
    pub height: Option<f32>,

    /// Drag divider IDX to coordinate COORD along its drag axis (repeatable)
    #[arg(short, long = "drag", value_name = "IDX:COORD", value_parser = parse_drag)]
    pub drags: Vec<ScriptedDrag>,

    /// Print the final geometry as JSON
    #[arg(long)]
    pub json: bool,
}

/// One scripted press-move-release on a divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedDrag {
    pub divider: usize,
    pub coord: f32,
}

fn parse_drag(value: &str) -> Result<ScriptedDrag, String> {
    let (divider, coord) = value
        .split_once(':')
        .ok_or_else(|| format!("expected IDX:COORD, got '{}'", value))?;
    let divider = divider
        .trim()
        .parse()
        .map_err(|_| format!("invalid divider index '{}'", divider))?;
    let coord: f32 = coord
        .trim()
        .parse()
        .map_err(|_| format!("invalid coordinate '{}'", coord))?;
    if !coord.is_finite() {
        return Err(format!("coordinate must be finite, got '{}'", coord));
    }
    Ok(ScriptedDrag { divider, coord })
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config: WorkspaceConfig,
    pub layout: LayoutDecl,
    pub drags: Vec<ScriptedDrag>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mut config = match &self.config {
            Some(path) => WorkspaceConfig::load_from(path).map_err(|e| format!("{:#}", e))?,
            None => WorkspaceConfig::load(),
        };

        let width = self.width.unwrap_or(config.container.width);
        let height = self.height.unwrap_or(config.container.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(format!("invalid container size {}x{}", width, height));
        }
        config.container = Size::new(width, height);

        let layout = match &self.layout {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                LayoutDecl::from_yaml_str(&source)
                    .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?
            }
            None => LayoutDecl::default_composition(),
        };

        Ok(StartupConfig {
            config,
            layout,
            drags: self.drags,
            json: self.json,
        })
    }
}
