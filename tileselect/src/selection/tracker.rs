//! Selection state machine.
//!
//! Two states, `Idle` and `Drawing`, driven by grid-cell activations and
//! pointer moves. Activating a cell while idle opens a drag session seeded
//! with that cell; moving the pointer rebuilds the transient selection
//! from the rectangle between the anchor and the pointer; activating again
//! commits the transient into the persistent selection.
//!
//! Transitions return values describing what happened instead of firing
//! callbacks, leaving event dispatch to the control surface.

use tracing::debug;

use crate::coord::{point_to_tile, tile_to_quad_key, GeoRect, LngLat};
use crate::grid::{GridBuilder, GridError, TileCell, TileCollection};

use super::model::{DragSession, SelectionSet};

/// Result of a grid-cell activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Idle to Drawing: a drag session was opened and seeded.
    DrawStarted {
        /// Persistent plus transient tile count after seeding.
        total: usize,
    },
    /// Drawing to Idle: the transient selection was committed.
    DrawEnded {
        /// Number of tiles merged into the persistent selection.
        merged: usize,
        /// Persistent tile count after the merge.
        total: usize,
    },
}

/// Result of a pointer move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawUpdate {
    /// Not drawing; pointer moves are ignored while idle.
    Idle,
    /// The pointer stayed inside the tile of the previous accepted move;
    /// nothing was recomputed.
    Unchanged,
    /// The candidate selection would exceed capacity; state is untouched.
    Rejected {
        /// Candidate plus persistent count that tripped the limit.
        candidate_total: usize,
    },
    /// The transient selection was replaced.
    Updated {
        /// Tiles in the new transient selection.
        transient: usize,
        /// Persistent plus transient tile count.
        total: usize,
    },
}

/// Owns the interactive selection lifecycle and the persistent selection.
#[derive(Debug)]
pub struct SelectionTracker {
    builder: GridBuilder,
    max_tile: usize,
    session: Option<DragSession>,
    selected: SelectionSet,
}

impl SelectionTracker {
    /// Create an idle tracker with an empty selection.
    pub fn new(builder: GridBuilder, max_tile: usize) -> Self {
        Self {
            builder,
            max_tile,
            session: None,
            selected: SelectionSet::new(),
        }
    }

    /// Replace the persistent selection, e.g. with one captured from an
    /// earlier control instance. Intended for use before interaction
    /// starts; an in-progress session keeps its transient cells.
    pub fn restore(&mut self, selected: SelectionSet) {
        self.selected = selected;
    }

    /// The grid builder this tracker selects against.
    pub fn builder(&self) -> &GridBuilder {
        &self.builder
    }

    /// Capacity limit for the persistent selection.
    pub fn max_tile(&self) -> usize {
        self.max_tile
    }

    /// True while a drag session is open.
    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    /// The committed selection.
    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// Number of committed tiles.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// The in-progress selection while drawing.
    pub fn transient(&self) -> Option<&TileCollection> {
        self.session.as_ref().map(|session| session.transient())
    }

    /// Committed plus in-progress tile count.
    pub fn total_count(&self) -> usize {
        self.selected.len() + self.transient().map_or(0, TileCollection::len)
    }

    /// Drives the Idle/Drawing transition for a grid-cell activation.
    ///
    /// While idle, opens a drag session anchored at `point` and seeds it
    /// with the tile under the point. The seed honors the same rules as
    /// move updates: an already-committed tile or a full selection seeds
    /// an empty transient. While drawing, commits the transient selection
    /// and returns to idle.
    pub fn activate(&mut self, point: LngLat) -> Activation {
        match self.session.take() {
            None => {
                let cell = TileCell::from_tile(&point_to_tile(
                    point.lng,
                    point.lat,
                    self.builder.zoom(),
                ));
                let mut seed = TileCollection::new();
                if !self.selected.contains(&cell.quad_key) && self.selected.len() < self.max_tile {
                    seed.push(cell);
                }
                self.session = Some(DragSession::new(point, seed));

                let total = self.total_count();
                debug!(%point, total, "drawing started");
                Activation::DrawStarted { total }
            }
            Some(session) => {
                let transient = session.into_transient();
                let merged = transient.len();
                if !transient.is_empty() {
                    self.selected.merge(transient);
                }

                let total = self.selected.len();
                debug!(merged, total, "drawing ended");
                Activation::DrawEnded { merged, total }
            }
        }
    }

    /// Rebuilds the transient selection for a pointer position.
    ///
    /// Ignored while idle. A move within the previous move's tile is
    /// suppressed. A candidate that would push the combined count past
    /// `max_tile` is rejected without touching any state, so the
    /// in-progress selection stops growing until the drag shrinks.
    pub fn pointer_move(&mut self, point: LngLat) -> Result<DrawUpdate, GridError> {
        let zoom = self.builder.zoom();
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return Ok(DrawUpdate::Idle),
        };

        if let Some(last) = session.last_move() {
            if point_to_tile(last.lng, last.lat, zoom) == point_to_tile(point.lng, point.lat, zoom)
            {
                return Ok(DrawUpdate::Unchanged);
            }
        }

        let rect = GeoRect::from_corners(session.anchor(), point);
        let selected = &self.selected;
        let candidate = self.builder.cover_excluding(&rect, |sample| {
            selected.contains(&tile_to_quad_key(&point_to_tile(
                sample.lng, sample.lat, zoom,
            )))
        })?;

        let candidate_total = candidate.len() + self.selected.len();
        if candidate_total > self.max_tile {
            debug!(
                candidate_total,
                max_tile = self.max_tile,
                "capacity reached, update rejected"
            );
            return Ok(DrawUpdate::Rejected { candidate_total });
        }

        let transient = candidate.len();
        session.accept_move(point, candidate);
        Ok(DrawUpdate::Updated {
            transient,
            total: candidate_total,
        })
    }

    /// Resets the persistent selection from either state.
    ///
    /// An in-progress drawing session is unaffected.
    pub fn clear(&mut self) {
        debug!(cleared = self.selected.len(), "selection cleared");
        self.selected.clear();
    }

    /// Discards an in-progress session without committing it. Returns
    /// whether a session was open.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}
