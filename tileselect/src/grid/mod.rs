//! Tile grid geometry
//!
//! Turns geographic rectangles into covering sets of tile cells: the
//! whole-viewport grid overlay and the drag-selection candidate set.
//!
//! # Example
//!
//! ```
//! use tileselect::coord::GeoRect;
//! use tileselect::grid::GridBuilder;
//!
//! let builder = GridBuilder::new(10);
//! let viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
//! let grid = builder.cover(&viewport).unwrap();
//! assert!(!grid.is_empty());
//! ```

mod builder;
mod cell;

pub use builder::{GridBuilder, GridError, SweepStrategy};
pub use cell::{Position, TileCell, TileCollection, TilePolygon};
