//! Tile selection control
//!
//! Adapts host-renderer lifecycle events into the grid builder and the
//! selection state machine, and pushes the resulting geometry back to the
//! renderer's named layers. The host owns the event loop and calls the
//! `handle_*` methods; the control owns the selection state.
//!
//! # Layers
//!
//! On load the control establishes three fill layers: the background
//! [`GRID_LAYER`], the in-progress [`SELECT_LAYER`] and the committed
//! [`SELECTED_LAYER`], the latter two inserted beneath the grid.
//!
//! # Example
//!
//! ```ignore
//! use tileselect::control::{ControlConfig, TileControl};
//!
//! let mut control = TileControl::new(ControlConfig::default());
//! control.on_add(surface);
//! control.handle_load()?;
//! // route renderer events:
//! control.handle_grid_click(point)?;
//! if control.wants_pointer_move() {
//!     control.handle_pointer_move(point)?;
//! }
//! ```

mod config;
mod error;
mod events;
mod surface;

pub use config::{
    ControlConfig, ControlStyles, LayerPaint, LayerSpec, DEFAULT_MAX_TILE,
    DEFAULT_MIN_ZOOM_TO_SHOW_GRID, DEFAULT_ZOOM_LEVEL, GRID_LAYER, SELECTED_LAYER, SELECT_LAYER,
};
pub use error::ControlError;
pub use events::{NullEvents, TileControlEvents, ViewportContext};
pub use surface::MapSurface;

use tracing::debug;

use crate::coord::{snap_to_tile_center, LngLat, QuadKey};
use crate::geojson::FeatureCollection;
use crate::grid::{GridBuilder, TileCollection};
use crate::selection::{Activation, DrawUpdate, SelectionSet, SelectionTracker};

/// Interactive tile-selection control bound to one map surface.
pub struct TileControl<S: MapSurface> {
    config: ControlConfig,
    styles: ControlStyles,
    events: Box<dyn TileControlEvents>,
    tracker: SelectionTracker,
    surface: Option<S>,
}

impl<S: MapSurface> TileControl<S> {
    /// Create a control without an observer.
    pub fn new(config: ControlConfig) -> Self {
        Self::with_events(config, Box::new(NullEvents))
    }

    /// Create a control with a lifecycle observer.
    pub fn with_events(config: ControlConfig, events: Box<dyn TileControlEvents>) -> Self {
        let builder = GridBuilder::new(config.zoom_level).with_strategy(config.strategy);
        let tracker = SelectionTracker::new(builder, config.max_tile);
        Self {
            config,
            styles: ControlStyles::default(),
            events,
            tracker,
            surface: None,
        }
    }

    /// Replace the layer styles.
    pub fn with_styles(mut self, styles: ControlStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Seed the persistent selection, e.g. from an earlier control
    /// instance. The seeded cells reach the committed layer on load.
    pub fn with_selection(mut self, restored: SelectionSet) -> Self {
        self.tracker.restore(restored);
        self
    }

    /// The control's immutable options.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// True while a map surface is attached.
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// True while a drawing session is open. Hosts can use this to scope
    /// pointer-move delivery to the drawing state.
    pub fn wants_pointer_move(&self) -> bool {
        self.tracker.is_drawing()
    }

    /// The committed selection.
    pub fn selection(&self) -> &SelectionSet {
        self.tracker.selected()
    }

    /// The in-progress selection while drawing.
    pub fn transient(&self) -> Option<&TileCollection> {
        self.tracker.transient()
    }

    /// Quad keys of the committed selection, in commit order.
    pub fn quad_keys(&self) -> impl Iterator<Item = &QuadKey> {
        self.tracker.selected().quad_keys()
    }

    /// Widget status readout for the current count.
    pub fn status_line(&self) -> String {
        match self.tracker.total_count() {
            0 => "No Tiles Selected.".to_string(),
            count => format!("{}/{} Tiles Selected.", count, self.config.max_tile),
        }
    }

    /// Attach the host surface. Handlers abort with
    /// [`ControlError::NotAttached`] until this is called.
    pub fn on_add(&mut self, surface: S) {
        debug!("control attached");
        self.surface = Some(surface);
    }

    /// Detach from the host, discarding any in-progress drawing session.
    /// Returns the surface so the host can keep using it.
    pub fn on_remove(&mut self) -> Option<S> {
        if self.tracker.cancel() {
            debug!("in-progress drawing session discarded");
        }
        let surface = self.surface.take();
        if surface.is_some() {
            debug!("control detached");
        }
        surface
    }

    /// Viewport-ready: establish the three layers, seed the committed
    /// layer from a restored selection, and draw the initial grid.
    pub fn handle_load(&mut self) -> Result<(), ControlError> {
        let empty = FeatureCollection::empty();
        let seeded = FeatureCollection::from(self.tracker.selected().collection());
        let min_zoom = self.config.min_zoom_to_show_grid;

        let surface = self.surface.as_mut().ok_or(ControlError::NotAttached)?;
        surface.add_layer(
            &LayerSpec {
                id: GRID_LAYER.to_string(),
                paint: self.styles.grid_layer.clone(),
                min_zoom,
                insert_before: None,
            },
            &empty,
        );
        surface.add_layer(
            &LayerSpec {
                id: SELECT_LAYER.to_string(),
                paint: self.styles.select_layer.clone(),
                min_zoom,
                insert_before: Some(GRID_LAYER.to_string()),
            },
            &empty,
        );
        surface.add_layer(
            &LayerSpec {
                id: SELECTED_LAYER.to_string(),
                paint: self.styles.selected_layer.clone(),
                min_zoom,
                insert_before: Some(GRID_LAYER.to_string()),
            },
            &seeded,
        );
        debug!("layers established");

        self.draw_grid()
    }

    /// Viewport settled after a pan or zoom: recompute the grid overlay.
    pub fn handle_viewport_change(&mut self) -> Result<(), ControlError> {
        self.draw_grid()
    }

    /// Grid-cell activation: starts or commits a drawing session.
    pub fn handle_grid_click(&mut self, point: LngLat) -> Result<(), ControlError> {
        let surface = self.surface.as_mut().ok_or(ControlError::NotAttached)?;
        let ctx = surface.viewport();
        let snapped = snap_to_tile_center(point.lng, point.lat, self.config.zoom_level);

        match self.tracker.activate(snapped) {
            Activation::DrawStarted { .. } => {
                let data = match self.tracker.transient() {
                    Some(transient) => FeatureCollection::from(transient),
                    None => FeatureCollection::empty(),
                };
                surface.set_layer_data(SELECT_LAYER, &data);
                self.events.on_tile_draw_start(&ctx);
            }
            Activation::DrawEnded { merged, total } => {
                self.events.on_tile_draw_end(&ctx);
                surface.set_layer_data(SELECT_LAYER, &FeatureCollection::empty());
                let data = FeatureCollection::from(self.tracker.selected().collection());
                surface.set_layer_data(SELECTED_LAYER, &data);
                if merged > 0 {
                    self.events.on_count_changed(total, self.config.max_tile);
                }
            }
        }
        Ok(())
    }

    /// Pointer move: rebuilds the in-progress selection while drawing.
    /// Ignored while idle; rejected over-capacity updates change nothing
    /// and notify nothing.
    pub fn handle_pointer_move(&mut self, point: LngLat) -> Result<(), ControlError> {
        if !self.tracker.is_drawing() {
            return Ok(());
        }
        let surface = self.surface.as_mut().ok_or(ControlError::NotAttached)?;
        let ctx = surface.viewport();
        let snapped = snap_to_tile_center(point.lng, point.lat, self.config.zoom_level);

        match self.tracker.pointer_move(snapped)? {
            DrawUpdate::Updated { total, .. } => {
                let data = match self.tracker.transient() {
                    Some(transient) => FeatureCollection::from(transient),
                    None => FeatureCollection::empty(),
                };
                surface.set_layer_data(SELECT_LAYER, &data);
                self.events.on_tile_drawing(&ctx);
                self.events.on_count_changed(total, self.config.max_tile);
            }
            DrawUpdate::Idle | DrawUpdate::Unchanged | DrawUpdate::Rejected { .. } => {}
        }
        Ok(())
    }

    /// Reset the committed selection and blank its layer. Does not end an
    /// in-progress drawing session.
    pub fn clear_selection(&mut self) -> Result<(), ControlError> {
        let surface = self.surface.as_mut().ok_or(ControlError::NotAttached)?;
        self.tracker.clear();
        surface.set_layer_data(SELECTED_LAYER, &FeatureCollection::empty());
        self.events.on_count_changed(0, self.config.max_tile);
        Ok(())
    }

    /// Recompute and push the grid overlay when the viewport is zoomed in
    /// far enough; below the threshold the grid is left undrawn.
    fn draw_grid(&mut self) -> Result<(), ControlError> {
        let surface = self.surface.as_mut().ok_or(ControlError::NotAttached)?;
        let ctx = surface.viewport();
        if ctx.zoom < self.config.min_zoom_to_show_grid as f64 {
            debug!(
                zoom = ctx.zoom,
                threshold = self.config.min_zoom_to_show_grid,
                "below grid zoom threshold, grid not recomputed"
            );
            return Ok(());
        }

        let grid = self.tracker.builder().cover(&ctx.bounds)?;
        debug!(tiles = grid.len(), "grid overlay recomputed");
        let data = FeatureCollection::from(&grid);
        self.events.on_draw_grid(&ctx);
        surface.set_layer_data(GRID_LAYER, &data);
        Ok(())
    }
}
