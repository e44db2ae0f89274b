//! Declarative tree shapes supplied by the host at startup
//!
//! A composition is plain data (YAML or JSON through serde). Ids, render
//! layers and geometry are assigned when the workspace is built from it.

use serde::{Deserialize, Serialize};

use super::node::Axis;
use super::viewport::SliceAxis;

/// Declared content of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Axial,
    Coronal,
    Sagittal,
    Perspective,
    Inspector,
}

impl PanelRole {
    pub fn slice_axis(self) -> Option<SliceAxis> {
        match self {
            PanelRole::Axial => Some(SliceAxis::Axial),
            PanelRole::Coronal => Some(SliceAxis::Coronal),
            PanelRole::Sagittal => Some(SliceAxis::Sagittal),
            PanelRole::Perspective | PanelRole::Inspector => None,
        }
    }

    /// The inspector keeps its width when the window resizes
    pub fn default_shrinkable(self) -> bool {
        !matches!(self, PanelRole::Inspector)
    }
}

/// A declared panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDecl {
    pub role: PanelRole,
    /// Falls back to the configured default minimum
    #[serde(default)]
    pub min_width: Option<f32>,
    #[serde(default)]
    pub min_height: Option<f32>,
    /// Initial size; zero means "share evenly"
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    /// Falls back to the role's default
    #[serde(default)]
    pub shrinkable: Option<bool>,
}

impl PanelDecl {
    pub fn new(role: PanelRole) -> Self {
        Self {
            role,
            min_width: None,
            min_height: None,
            width: 0.0,
            height: 0.0,
            shrinkable: None,
        }
    }

    pub fn min(mut self, width: f32, height: f32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn shrinkable(mut self, shrinkable: bool) -> Self {
        self.shrinkable = Some(shrinkable);
        self
    }
}

/// A declared node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutDecl {
    Group {
        axis: Axis,
        children: Vec<LayoutDecl>,
    },
    Panel(PanelDecl),
}

impl LayoutDecl {
    pub fn group(axis: Axis, children: Vec<LayoutDecl>) -> Self {
        LayoutDecl::Group { axis, children }
    }

    pub fn row(children: Vec<LayoutDecl>) -> Self {
        Self::group(Axis::Row, children)
    }

    pub fn column(children: Vec<LayoutDecl>) -> Self {
        Self::group(Axis::Column, children)
    }

    pub fn panel(decl: PanelDecl) -> Self {
        LayoutDecl::Panel(decl)
    }

    /// Shorthand for a panel with only a role
    pub fn role(role: PanelRole) -> Self {
        LayoutDecl::Panel(PanelDecl::new(role))
    }

    /// Parse a composition from YAML (JSON is accepted too)
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Two slice columns, a perspective view and the inspector.
    ///
    /// ```text
    /// | Axial   | Perspective | Inspector |
    /// | Coronal | Sagittal    |           |
    /// ```
    pub fn default_composition() -> Self {
        LayoutDecl::row(vec![
            LayoutDecl::column(vec![
                LayoutDecl::role(PanelRole::Axial),
                LayoutDecl::role(PanelRole::Coronal),
            ]),
            LayoutDecl::column(vec![
                LayoutDecl::role(PanelRole::Perspective),
                LayoutDecl::role(PanelRole::Sagittal),
            ]),
            LayoutDecl::panel(
                PanelDecl::new(PanelRole::Inspector)
                    .min(200.0, 0.0)
                    .size(280.0, 0.0),
            ),
        ])
    }
}
