//! Interactive tile selection
//!
//! The selection state machine: an idle/drawing lifecycle that turns
//! grid-cell activations and pointer moves into a transient (in-progress)
//! selection and a persistent, capacity-bounded, deduplicated selection.
//!
//! # Example
//!
//! ```
//! use tileselect::coord::LngLat;
//! use tileselect::grid::GridBuilder;
//! use tileselect::selection::SelectionTracker;
//!
//! let mut tracker = SelectionTracker::new(GridBuilder::new(10), 750);
//!
//! let anchor = LngLat::new(0.5, 0.5);
//! tracker.activate(anchor);             // start drawing
//! tracker.pointer_move(LngLat::new(0.9, 0.5)).unwrap();
//! tracker.activate(LngLat::new(0.9, 0.5)); // commit
//!
//! assert!(tracker.selected_count() > 0);
//! ```

mod model;
mod tracker;

pub use model::{DragSession, SelectionSet};
pub use tracker::{Activation, DrawUpdate, SelectionTracker};
