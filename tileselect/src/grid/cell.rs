//! Grid cell geometry types.
//!
//! A cell pairs the renderable polygon ring of one tile with the quad key
//! identifying it, so the polygon/identity alignment the selection logic
//! relies on is structural rather than a convention between two parallel
//! sequences.

use crate::coord::{tile_to_bbox, tile_to_quad_key, GeoRect, QuadKey, TileCoord};

/// A GeoJSON-ordered position: `[lng, lat]`.
pub type Position = [f64; 2];

/// Closed polygon ring for one tile: four corners plus the repeated
/// first vertex.
///
/// Corner order: (west,south), (east,south), (east,north), (west,north),
/// (west,south).
#[derive(Debug, Clone, PartialEq)]
pub struct TilePolygon {
    ring: [Position; 5],
}

impl TilePolygon {
    /// Build the renderable ring for a tile's bounding box.
    pub fn from_bbox(bbox: &GeoRect) -> Self {
        Self {
            ring: [
                [bbox.west, bbox.south],
                [bbox.east, bbox.south],
                [bbox.east, bbox.north],
                [bbox.west, bbox.north],
                [bbox.west, bbox.south],
            ],
        }
    }

    /// The five ring positions.
    pub fn ring(&self) -> &[Position; 5] {
        &self.ring
    }
}

/// One grid cell: renderable polygon plus its quad-key identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TileCell {
    /// Renderable geometry of the cell
    pub polygon: TilePolygon,
    /// Unique identity of the cell within its zoom level
    pub quad_key: QuadKey,
}

impl TileCell {
    /// Derive the cell for a tile coordinate.
    pub fn from_tile(tile: &TileCoord) -> Self {
        Self {
            polygon: TilePolygon::from_bbox(&tile_to_bbox(tile)),
            quad_key: tile_to_quad_key(tile),
        }
    }
}

/// Ordered sequence of grid cells.
///
/// Produced by the grid builder and carried through the selection
/// lifecycle. Whether duplicate quad keys may appear depends on the
/// producing operation: the whole-viewport sweep permits them, the
/// drag sweep deduplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileCollection {
    cells: Vec<TileCell>,
}

impl TileCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the collection holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append one cell, preserving order.
    pub fn push(&mut self, cell: TileCell) {
        self.cells.push(cell);
    }

    /// The cells in order.
    pub fn cells(&self) -> &[TileCell] {
        &self.cells
    }

    /// Iterator over the cell polygons, aligned with [`quad_keys`].
    ///
    /// [`quad_keys`]: TileCollection::quad_keys
    pub fn polygons(&self) -> impl Iterator<Item = &TilePolygon> {
        self.cells.iter().map(|cell| &cell.polygon)
    }

    /// Iterator over the cell quad keys, aligned with [`polygons`].
    ///
    /// [`polygons`]: TileCollection::polygons
    pub fn quad_keys(&self) -> impl Iterator<Item = &QuadKey> {
        self.cells.iter().map(|cell| &cell.quad_key)
    }

    /// Linear-scan membership test; use [`crate::selection::SelectionSet`]
    /// where repeated lookups matter.
    pub fn contains_quad_key(&self, key: &QuadKey) -> bool {
        self.cells.iter().any(|cell| &cell.quad_key == key)
    }

    /// Order-preserving concatenation of another collection.
    pub fn append(&mut self, mut other: TileCollection) {
        self.cells.append(&mut other.cells);
    }
}

impl FromIterator<TileCell> for TileCollection {
    fn from_iter<I: IntoIterator<Item = TileCell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::point_to_tile;

    #[test]
    fn test_polygon_ring_is_closed() {
        let bbox = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let polygon = TilePolygon::from_bbox(&bbox);
        let ring = polygon.ring();

        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4], "first and last vertex must coincide");
    }

    #[test]
    fn test_polygon_corner_order() {
        let bbox = GeoRect::new(10.0, 20.0, 11.0, 21.0).unwrap();
        let ring = TilePolygon::from_bbox(&bbox).ring().to_owned();

        assert_eq!(ring[0], [10.0, 20.0]); // west, south
        assert_eq!(ring[1], [11.0, 20.0]); // east, south
        assert_eq!(ring[2], [11.0, 21.0]); // east, north
        assert_eq!(ring[3], [10.0, 21.0]); // west, north
    }

    #[test]
    fn test_cell_polygon_matches_quad_key() {
        let tile = point_to_tile(9.99, 53.55, 14);
        let cell = TileCell::from_tile(&tile);

        assert_eq!(cell.quad_key, crate::coord::tile_to_quad_key(&tile));
        assert_eq!(
            cell.polygon,
            TilePolygon::from_bbox(&crate::coord::tile_to_bbox(&tile))
        );
    }

    #[test]
    fn test_collection_accessors_stay_aligned() {
        let mut collection = TileCollection::new();
        for x in 0..4 {
            collection.push(TileCell::from_tile(&crate::coord::TileCoord::new(x, 0, 5)));
        }

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.polygons().count(), collection.quad_keys().count());

        let first_key = collection.quad_keys().next().unwrap().clone();
        assert!(collection.contains_quad_key(&first_key));
    }

    #[test]
    fn test_append_preserves_order() {
        let a: TileCollection = (0..2)
            .map(|x| TileCell::from_tile(&crate::coord::TileCoord::new(x, 0, 5)))
            .collect();
        let b: TileCollection = (2..5)
            .map(|x| TileCell::from_tile(&crate::coord::TileCoord::new(x, 0, 5)))
            .collect();

        let mut merged = a.clone();
        merged.append(b.clone());

        assert_eq!(merged.len(), 5);
        let keys: Vec<_> = merged.quad_keys().cloned().collect();
        let expected: Vec<_> = a.quad_keys().chain(b.quad_keys()).cloned().collect();
        assert_eq!(keys, expected);
    }
}
