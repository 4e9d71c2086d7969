//! TileSelect - interactive slippy-map tile selection
//!
//! This library turns a map viewport into a tile grid overlay and turns
//! pointer gestures into a persistent, capacity-bounded tile selection.
//! It is renderer-agnostic: the host map library delivers viewport and
//! pointer events and draws the polygon collections the control pushes to
//! its named layers.
//!
//! # Modules
//!
//! - [`coord`]: slippy-map tile addressing (points, tiles, quad keys)
//! - [`grid`]: covering a geographic rectangle with tile cells
//! - [`selection`]: the idle/drawing selection state machine
//! - [`control`]: the host-facing control surface
//! - [`geojson`]: the feature-collection payloads pushed to the renderer
//! - [`telemetry`]: logging setup for binaries
//!
//! # Example
//!
//! ```ignore
//! use tileselect::control::{ControlConfig, TileControl};
//!
//! let config = ControlConfig::new().with_max_tile(750);
//! let mut control = TileControl::new(config);
//! control.on_add(my_surface);
//! control.handle_load()?;
//! ```

pub mod control;
pub mod coord;
pub mod geojson;
pub mod grid;
pub mod selection;
pub mod telemetry;
