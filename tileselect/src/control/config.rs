//! Control configuration and layer styling.
//!
//! Explicit configuration values applied at construction, replacing the
//! option/style singletons a host application might otherwise share
//! between controls. Defaults are enumerated here.

use crate::grid::SweepStrategy;

/// Default capacity of the persistent selection.
pub const DEFAULT_MAX_TILE: usize = 750;

/// Default lattice zoom level tiles are selected at.
pub const DEFAULT_ZOOM_LEVEL: u8 = 22;

/// Default viewport zoom below which the grid overlay is not recomputed.
pub const DEFAULT_MIN_ZOOM_TO_SHOW_GRID: u8 = 17;

/// Identifier of the background grid overlay layer.
pub const GRID_LAYER: &str = "grid-layer";

/// Identifier of the in-progress selection layer.
pub const SELECT_LAYER: &str = "select-layer";

/// Identifier of the committed selection layer.
pub const SELECTED_LAYER: &str = "selected-layer";

/// Immutable options for one control instance.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Capacity of the persistent selection.
    pub max_tile: usize,
    /// Lattice zoom level tiles are selected at.
    pub zoom_level: u8,
    /// Viewport zoom below which the grid overlay is left undrawn.
    pub min_zoom_to_show_grid: u8,
    /// Sweep strategy for grid geometry.
    pub strategy: SweepStrategy,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            max_tile: DEFAULT_MAX_TILE,
            zoom_level: DEFAULT_ZOOM_LEVEL,
            min_zoom_to_show_grid: DEFAULT_MIN_ZOOM_TO_SHOW_GRID,
            strategy: SweepStrategy::default(),
        }
    }
}

impl ControlConfig {
    /// Create a config with the enumerated defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection capacity.
    pub fn with_max_tile(mut self, max_tile: usize) -> Self {
        self.max_tile = max_tile;
        self
    }

    /// Set the lattice zoom level.
    pub fn with_zoom_level(mut self, zoom_level: u8) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    /// Set the grid visibility zoom threshold.
    pub fn with_min_zoom_to_show_grid(mut self, min_zoom: u8) -> Self {
        self.min_zoom_to_show_grid = min_zoom;
        self
    }

    /// Set the sweep strategy.
    pub fn with_strategy(mut self, strategy: SweepStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Fill paint for one rendered layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPaint {
    /// Fill color, as understood by the host renderer.
    pub fill_color: String,
    /// Outline color; `None` leaves the renderer default.
    pub fill_outline_color: Option<String>,
    /// Fill opacity, 0.0 to 1.0.
    pub fill_opacity: f64,
}

impl LayerPaint {
    /// Solid fill without an explicit outline.
    pub fn fill(color: impl Into<String>, opacity: f64) -> Self {
        Self {
            fill_color: color.into(),
            fill_outline_color: None,
            fill_opacity: opacity,
        }
    }
}

/// Paint for the three control-owned layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlStyles {
    /// Background grid overlay.
    pub grid_layer: LayerPaint,
    /// In-progress selection.
    pub select_layer: LayerPaint,
    /// Committed selection.
    pub selected_layer: LayerPaint,
}

impl Default for ControlStyles {
    fn default() -> Self {
        Self {
            grid_layer: LayerPaint {
                fill_color: "black".to_string(),
                fill_outline_color: Some("black".to_string()),
                fill_opacity: 0.2,
            },
            select_layer: LayerPaint::fill("blue", 0.2),
            selected_layer: LayerPaint::fill("red", 0.2),
        }
    }
}

/// Instruction for the host renderer to establish one fill layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    /// Layer and source identifier.
    pub id: String,
    /// Fill paint.
    pub paint: LayerPaint,
    /// Renderer-side zoom floor for the layer.
    pub min_zoom: u8,
    /// Existing layer to insert beneath, if any.
    pub insert_before: Option<String>,
}
