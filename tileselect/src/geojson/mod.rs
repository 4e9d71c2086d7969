//! GeoJSON payloads for the host renderer.
//!
//! The control pushes each tile collection to a named layer source as a
//! feature collection holding one `MultiPolygon` feature, the shape the
//! renderer's data sources consume.

use serde::{Deserialize, Serialize};

use crate::grid::{Position, TileCollection};

/// A GeoJSON geometry. Only `MultiPolygon` is produced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Polygons as rings of positions; each tile contributes one
    /// single-ring polygon.
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

/// A GeoJSON feature wrapping one geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// The empty collection, used to blank a layer.
    pub fn empty() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Number of polygons across all features.
    pub fn polygon_count(&self) -> usize {
        self.features
            .iter()
            .map(|feature| match &feature.geometry {
                Geometry::MultiPolygon { coordinates } => coordinates.len(),
            })
            .sum()
    }

    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&TileCollection> for FeatureCollection {
    /// One `MultiPolygon` feature carrying every cell's ring.
    fn from(collection: &TileCollection) -> Self {
        let coordinates = collection
            .polygons()
            .map(|polygon| vec![polygon.ring().to_vec()])
            .collect();
        Self {
            features: vec![Feature {
                geometry: Geometry::MultiPolygon { coordinates },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoRect;
    use crate::grid::GridBuilder;

    #[test]
    fn test_empty_collection_serializes_without_features() {
        let json = serde_json::to_value(FeatureCollection::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "FeatureCollection",
                "features": [],
            })
        );
    }

    #[test]
    fn test_collection_becomes_one_multipolygon_feature() {
        let builder = GridBuilder::new(10);
        let grid = builder
            .cover(&GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap())
            .unwrap();

        let fc = FeatureCollection::from(&grid);
        assert_eq!(fc.features.len(), 1, "always a single MultiPolygon feature");
        assert_eq!(fc.polygon_count(), grid.len());

        let json = serde_json::to_value(&fc).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["type"], "Feature");
        assert_eq!(json["features"][0]["geometry"]["type"], "MultiPolygon");
    }

    #[test]
    fn test_each_polygon_is_a_closed_single_ring() {
        let builder = GridBuilder::new(10);
        let grid = builder
            .cover(&GeoRect::new(0.0, 0.0, 0.5, 0.5).unwrap())
            .unwrap();
        let fc = FeatureCollection::from(&grid);

        let Geometry::MultiPolygon { coordinates } = &fc.features[0].geometry;
        for polygon in coordinates {
            assert_eq!(polygon.len(), 1, "tiles have no interior rings");
            let ring = &polygon[0];
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn test_json_round_trip() {
        let builder = GridBuilder::new(8);
        let grid = builder
            .cover(&GeoRect::new(10.0, 50.0, 11.0, 51.0).unwrap())
            .unwrap();
        let fc = FeatureCollection::from(&grid);

        let json = fc.to_json_string().unwrap();
        let back: FeatureCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fc);
    }
}
