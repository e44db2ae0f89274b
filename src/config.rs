//! Workspace configuration
//!
//! Stores user preferences in `~/.config/dockspace/config.yaml`. This covers
//! presentation defaults only; panel sizes are never written back.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Size, DIVIDER_THICKNESS};

/// Workspace configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Thickness of divider handles in world units
    #[serde(default = "default_divider_thickness")]
    pub divider_thickness: f32,

    /// Minimum width/height for panels that do not declare one
    #[serde(default)]
    pub default_min_size: f32,

    /// Initial container size before the host reports one
    #[serde(default = "default_container")]
    pub container: Size,
}

fn default_divider_thickness() -> f32 {
    DIVIDER_THICKNESS
}

fn default_container() -> Size {
    Size::new(1280.0, 720.0)
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            divider_thickness: default_divider_thickness(),
            default_min_size: 0.0,
            container: default_container(),
        }
    }
}

impl WorkspaceConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace nonsensical values with defaults
    fn sanitized(mut self) -> Self {
        if !(self.divider_thickness.is_finite() && self.divider_thickness > 0.0) {
            self.divider_thickness = default_divider_thickness();
        }
        if !(self.default_min_size.is_finite() && self.default_min_size >= 0.0) {
            self.default_min_size = 0.0;
        }
        if !(self.container.width.is_finite() && self.container.height.is_finite()) {
            self.container = default_container();
        }
        self.container.width = self.container.width.max(0.0);
        self.container.height = self.container.height.max(0.0);
        self
    }
}
