//! Interaction configuration for Deformkit
//!
//! A [`DeformerConfig`] is handed to the interaction engine at construction.
//! It carries the input capability of the host (touch or mouse), handle hit
//! radii, stacking order and cursor hints per controller kind. Configs can be
//! stored as JSON or TOML; the format follows the file extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SettingsError};

/// Controller kinds the configuration tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// Drags the whole contour.
    Move,
    /// Turns the contour around its center.
    Rotate,
    /// Drags a single point.
    Vertex,
    /// Drags one side of a quadrilateral.
    Edge,
    /// Drags one corner of a quadrilateral.
    Corner,
    /// Grows or shrinks a regular polygon.
    Expansion,
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Rotate => write!(f, "rotate"),
            Self::Vertex => write!(f, "vertex"),
            Self::Edge => write!(f, "edge"),
            Self::Corner => write!(f, "corner"),
            Self::Expansion => write!(f, "expansion"),
        }
    }
}

/// Stacking order per controller kind. Higher values are hit-tested first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZIndexTable {
    pub r#move: i32,
    pub rotate: i32,
    pub vertex: i32,
    pub edge: i32,
    pub corner: i32,
    pub expansion: i32,
}

impl ZIndexTable {
    pub fn get(&self, kind: ControllerKind) -> i32 {
        match kind {
            ControllerKind::Move => self.r#move,
            ControllerKind::Rotate => self.rotate,
            ControllerKind::Vertex => self.vertex,
            ControllerKind::Edge => self.edge,
            ControllerKind::Corner => self.corner,
            ControllerKind::Expansion => self.expansion,
        }
    }
}

impl Default for ZIndexTable {
    fn default() -> Self {
        Self {
            r#move: 0,
            rotate: 30,
            vertex: 20,
            edge: 10,
            corner: 20,
            expansion: 25,
        }
    }
}

/// Cursor class hints reported to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorHints {
    pub r#move: String,
    pub rotate: String,
    pub vertex: String,
    pub expansion: String,
    /// Left and right edges.
    pub horizontal_resize: String,
    /// Top and bottom edges.
    pub vertical_resize: String,
    /// Left-top and right-bottom corners.
    pub diagonal_resize: String,
    /// Right-top and left-bottom corners.
    pub anti_diagonal_resize: String,
}

impl Default for CursorHints {
    fn default() -> Self {
        Self {
            r#move: "move".to_string(),
            rotate: "grab".to_string(),
            vertex: "crosshair".to_string(),
            expansion: "nesw-resize".to_string(),
            horizontal_resize: "ew-resize".to_string(),
            vertical_resize: "ns-resize".to_string(),
            diagonal_resize: "nwse-resize".to_string(),
            anti_diagonal_resize: "nesw-resize".to_string(),
        }
    }
}

/// Configuration injected into the interaction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformerConfig {
    /// The host input is primarily touch; enlarges hit radii.
    pub touch_primary: bool,
    /// Handle hit radius for mouse input, in device pixels.
    pub handle_radius: f64,
    /// Handle hit radius for touch input, in device pixels.
    pub touch_handle_radius: f64,
    /// Distance from an edge line that still counts as hitting the edge.
    pub edge_tolerance: f64,
    /// Distance of the rotation handle above the top edge.
    pub rotation_handle_distance: f64,
    pub z_index: ZIndexTable,
    pub cursors: CursorHints,
}

impl Default for DeformerConfig {
    fn default() -> Self {
        Self {
            touch_primary: false,
            handle_radius: 6.0,
            touch_handle_radius: 16.0,
            edge_tolerance: 4.0,
            rotation_handle_distance: 30.0,
            z_index: ZIndexTable::default(),
            cursors: CursorHints::default(),
        }
    }
}

impl DeformerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a touch-primary host.
    pub fn touch() -> Self {
        Self {
            touch_primary: true,
            ..Self::default()
        }
    }

    /// Hit radius for the current input capability.
    pub fn effective_handle_radius(&self) -> f64 {
        if self.touch_primary {
            self.touch_handle_radius
        } else {
            self.handle_radius
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!(path = %path.display(), "loaded deformer config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved deformer config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let radii = [
            ("handle_radius", self.handle_radius),
            ("touch_handle_radius", self.touch_handle_radius),
        ];
        for (key, value) in radii {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(key, format!("must be > 0, got {}", value)));
            }
        }

        if !(self.edge_tolerance.is_finite() && self.edge_tolerance >= 0.0) {
            return Err(SettingsError::invalid(
                "edge_tolerance",
                format!("must be >= 0, got {}", self.edge_tolerance),
            ));
        }

        if !self.rotation_handle_distance.is_finite() {
            return Err(SettingsError::invalid(
                "rotation_handle_distance",
                "must be finite",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
