//! Panel kinds and the projections handed to the scene collaborators
//!
//! The core does not render or raycast. It only tells the host which
//! normalized camera rectangle each viewport occupies and where a click
//! landed inside a viewport.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::node::{Rect, Size};

/// Lowest render layer handed to slice views
pub const MIN_SLICE_LAYER: u32 = 12;
/// Highest render layer handed to slice views
pub const MAX_SLICE_LAYER: u32 = 24;

/// Anatomical plane shown by a slice view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceAxis {
    Axial,
    Coronal,
    Sagittal,
}

impl SliceAxis {
    pub fn display_name(&self) -> &'static str {
        match self {
            SliceAxis::Axial => "Axial",
            SliceAxis::Coronal => "Coronal",
            SliceAxis::Sagittal => "Sagittal",
        }
    }
}

/// What a panel shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelKind {
    /// Orthographic slice through the volume
    Slice {
        axis: SliceAxis,
        layer: u32,
        /// Slice offset along the plane normal, in [-0.5, 0.5]
        position: f32,
    },
    /// Free 3D perspective view
    Perspective,
    /// Property inspector (not a viewport)
    Inspector,
}

impl PanelKind {
    /// Viewports own a camera and receive clicks
    pub fn is_viewport(&self) -> bool {
        !matches!(self, PanelKind::Inspector)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PanelKind::Slice { axis, .. } => axis.display_name(),
            PanelKind::Perspective => "Perspective",
            PanelKind::Inspector => "Inspector",
        }
    }
}

/// Clamp a slice offset into its valid range
pub fn clamp_slice_position(position: f32) -> f32 {
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(-0.5, 0.5)
}

/// Hands out render layers for slice views, lowest free first
#[derive(Debug, Clone, Default)]
pub struct LayerAllocator {
    used: BTreeSet<u32>,
}

impl LayerAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Result<u32, LayoutError> {
        let layer = (MIN_SLICE_LAYER..=MAX_SLICE_LAYER)
            .find(|l| !self.used.contains(l))
            .ok_or(LayoutError::NoFreeLayer {
                min: MIN_SLICE_LAYER,
                max: MAX_SLICE_LAYER,
            })?;
        self.used.insert(layer);
        Ok(layer)
    }

    pub fn release(&mut self, layer: u32) {
        self.used.remove(&layer);
    }

    pub fn in_use(&self) -> usize {
        self.used.len()
    }
}

/// Normalized camera rectangle, origin at the bottom-left of the screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// Project a panel's world rectangle onto a screen of the given size.
    ///
    /// Returns `None` for a degenerate screen.
    pub fn for_panel(rect: Rect, screen: Size) -> Option<Self> {
        if screen.width <= 0.0 || screen.height <= 0.0 {
            return None;
        }
        Some(Self {
            x: rect.x / screen.width,
            y: (screen.height - rect.y - rect.height) / screen.height,
            width: rect.width / screen.width,
            height: rect.height / screen.height,
        })
    }
}

/// Click position inside `rect`, normalized with y pointing up.
///
/// Returns `None` for an empty panel.
pub fn normalized_click(rect: Rect, px: f32, py: f32) -> Option<(f32, f32)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let local_x = px - rect.x;
    let local_y = py - rect.y;
    Some((local_x / rect.width, 1.0 - local_y / rect.height))
}
