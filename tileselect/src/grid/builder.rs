//! Grid geometry builder.
//!
//! Covers a geographic rectangle with tile cells at a fixed zoom level by
//! sweeping sample points through degree space and resolving each sample
//! to its covering tile. The step between samples is derived from a
//! reference tile's bounding box; see [`SweepStrategy`] for how.

use std::collections::HashSet;

use thiserror::Error;
use tracing::trace;

use crate::coord::{point_to_tile, tile_to_bbox, GeoRect, LngLat, QuadKey};

use super::cell::{TileCell, TileCollection};

/// How the degree-space sweep derives its step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepStrategy {
    /// Derive one reference tile's degree dimensions from the rectangle's
    /// northeast corner and reuse them across the whole sweep.
    ///
    /// The lattice's degree-height varies with latitude, so a tall or
    /// high-latitude rectangle is swept with a step that only matches the
    /// reference row exactly. The northeast reference row is the narrowest,
    /// which makes the mismatch over-sample rather than skip.
    #[default]
    UniformStep,
    /// Re-derive the step at each latitude row from the tile at that row's
    /// latitude, so the sweep tracks the lattice instead of approximating
    /// it with one row's dimensions.
    PerRowStep,
}

/// Errors from grid geometry computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// The reference tile has zero width or height in degrees. Indicates a
    /// lattice/zoom misconfiguration, not a transient condition.
    #[error("degenerate tile step at zoom {zoom}: reference tile has zero size in degrees")]
    DegenerateStep { zoom: u8 },
}

/// Computes the tile cells covering a geographic rectangle.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    zoom: u8,
    strategy: SweepStrategy,
}

impl GridBuilder {
    /// Create a builder for the given lattice zoom level.
    pub fn new(zoom: u8) -> Self {
        Self {
            zoom,
            strategy: SweepStrategy::default(),
        }
    }

    /// Select the sweep strategy.
    pub fn with_strategy(mut self, strategy: SweepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The lattice zoom level this builder addresses.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Covers a viewport rectangle for the background grid overlay.
    ///
    /// Longitude is swept one step past the east edge; latitude stops at
    /// the north edge. Samples landing in the same tile produce duplicate
    /// cells, which the non-interactive grid layer tolerates; the drag
    /// path uses [`cover_excluding`] instead.
    ///
    /// A degenerate rectangle still yields the tile containing its point.
    ///
    /// [`cover_excluding`]: GridBuilder::cover_excluding
    pub fn cover(&self, rect: &GeoRect) -> Result<TileCollection, GridError> {
        let mut cells = TileCollection::new();
        self.sweep(rect, Bounds::Viewport, |point| {
            cells.push(TileCell::from_tile(&point_to_tile(
                point.lng, point.lat, self.zoom,
            )));
        })?;

        trace!(
            zoom = self.zoom,
            tiles = cells.len(),
            "covered viewport rectangle"
        );
        Ok(cells)
    }

    /// Covers a drag rectangle, skipping excluded samples and
    /// deduplicating by quad key.
    ///
    /// Bounds are padded by one step on every side so a rectangle corner
    /// near a tile edge still captures the full touching tile. Samples for
    /// which `exclude` returns true are skipped; the remaining cells are
    /// deduplicated because the selection capacity check counts cells.
    pub fn cover_excluding<F>(
        &self,
        rect: &GeoRect,
        exclude: F,
    ) -> Result<TileCollection, GridError>
    where
        F: Fn(LngLat) -> bool,
    {
        let mut cells = TileCollection::new();
        let mut seen: HashSet<QuadKey> = HashSet::new();
        self.sweep(rect, Bounds::PaddedDrag, |point| {
            if exclude(point) {
                return;
            }
            let cell = TileCell::from_tile(&point_to_tile(point.lng, point.lat, self.zoom));
            if seen.insert(cell.quad_key.clone()) {
                cells.push(cell);
            }
        })?;

        trace!(
            zoom = self.zoom,
            tiles = cells.len(),
            "covered drag rectangle"
        );
        Ok(cells)
    }

    /// Degree dimensions of the tile covering `point`.
    fn step_at(&self, point: LngLat) -> Result<(f64, f64), GridError> {
        let bbox = tile_to_bbox(&point_to_tile(point.lng, point.lat, self.zoom));
        let step_lng = bbox.east - bbox.west;
        let step_lat = bbox.north - bbox.south;
        if step_lng <= 0.0 || step_lat <= 0.0 {
            return Err(GridError::DegenerateStep { zoom: self.zoom });
        }
        Ok((step_lng, step_lat))
    }

    /// Runs the configured sweep, feeding each sample point to `emit`.
    fn sweep<F>(&self, rect: &GeoRect, bounds: Bounds, mut emit: F) -> Result<(), GridError>
    where
        F: FnMut(LngLat),
    {
        // The reference tile sits at the rectangle's northeast corner.
        let (step_lng, step_lat) = self.step_at(LngLat::new(rect.east, rect.north))?;
        let (lng_from, lng_to, lat_from, lat_to, inclusive) = match bounds {
            Bounds::Viewport => (rect.west, rect.east + step_lng, rect.south, rect.north, false),
            Bounds::PaddedDrag => (
                rect.west - step_lng,
                rect.east + step_lng,
                rect.south - step_lat,
                rect.north + step_lat,
                true,
            ),
        };

        match self.strategy {
            SweepStrategy::UniformStep => {
                let lats = axis_samples(lat_from, lat_to, step_lat, inclusive);
                for lng in axis_samples(lng_from, lng_to, step_lng, inclusive) {
                    for &lat in &lats {
                        emit(LngLat::new(lng, lat));
                    }
                }
            }
            SweepStrategy::PerRowStep => {
                let mut lat = lat_from;
                loop {
                    // Each row's step comes from the tile at that row's latitude.
                    let (row_step_lng, row_step_lat) =
                        self.step_at(LngLat::new(rect.east, lat))?;
                    for lng in axis_samples(lng_from, lng_to, row_step_lng, inclusive) {
                        emit(LngLat::new(lng, lat));
                    }
                    lat += row_step_lat;
                    let done = if inclusive { lat > lat_to } else { lat >= lat_to };
                    if done {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Sweep bounds for the two covering operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    /// Unpadded viewport sweep (east edge runs one step long).
    Viewport,
    /// Drag sweep padded by one step on every side.
    PaddedDrag,
}

/// Samples along one axis. Always yields `from`, so a degenerate span
/// still produces one sample.
fn axis_samples(from: f64, to: f64, step: f64, inclusive_end: bool) -> Vec<f64> {
    let mut samples = Vec::new();
    let mut v = from;
    loop {
        let in_range = if inclusive_end { v <= to } else { v < to };
        if !in_range {
            break;
        }
        samples.push(v);
        v += step;
    }
    if samples.is_empty() {
        samples.push(from);
    }
    samples
}
