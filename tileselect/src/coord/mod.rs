//! Slippy-map tile addressing
//!
//! Provides conversions between geographic coordinates (longitude/latitude)
//! and tile coordinates of the zoom-indexed Web Mercator lattice, plus the
//! quad-key identifiers used as tile identity throughout the crate.
//!
//! The forward conversions are pure and do not validate their input:
//! the grid sweep deliberately samples one step past its rectangle, so
//! out-of-range points must resolve deterministically rather than fail.
//! Range constants are published for callers that do want to validate
//! boundary input (the CLI does).

mod types;

pub use types::{
    CoordError, GeoRect, LngLat, QuadKey, TileCoord, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON,
    MIN_ZOOM,
};

use std::f64::consts::PI;

/// Converts a geographic point to the covering tile at a zoom level.
///
/// # Arguments
///
/// * `lng` - Longitude in degrees
/// * `lat` - Latitude in degrees
/// * `zoom` - Zoom level of the tile lattice
#[inline]
pub fn point_to_tile(lng: f64, lat: f64, zoom: u8) -> TileCoord {
    // Number of tiles along each axis at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    // Convert longitude to tile X coordinate
    let x = ((lng + 180.0) / 360.0 * n) as u32;

    // Convert latitude to tile Y coordinate using Web Mercator projection
    let lat_rad = lat * PI / 180.0;
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n) as u32;

    TileCoord { x, y, zoom }
}

/// Returns the geographic bounding box of a tile.
#[inline]
pub fn tile_to_bbox(tile: &TileCoord) -> GeoRect {
    let n = 2.0_f64.powi(tile.zoom as i32);

    let west = tile.x as f64 / n * 360.0 - 180.0;
    let east = (tile.x as f64 + 1.0) / n * 360.0 - 180.0;

    // Row edges via inverse Web Mercator; y grows southward
    let north = tile_edge_lat(tile.y as f64, n);
    let south = tile_edge_lat(tile.y as f64 + 1.0, n);

    GeoRect {
        west,
        south,
        east,
        north,
    }
}

/// Latitude of a horizontal tile edge at fractional row `y` of `n` rows.
#[inline]
fn tile_edge_lat(y: f64, n: f64) -> f64 {
    let lat_rad = (PI * (1.0 - 2.0 * y / n)).sinh().atan();
    lat_rad * 180.0 / PI
}

/// Derives the quad key naming a tile.
///
/// One digit per zoom level, most significant first: each digit encodes
/// the x/y bit pair at that level (x contributes 1, y contributes 2).
/// The empty key names the single zoom-0 tile.
#[inline]
pub fn tile_to_quad_key(tile: &TileCoord) -> QuadKey {
    let mut key = String::with_capacity(tile.zoom as usize);
    for level in (1..=tile.zoom).rev() {
        let mask = 1u32 << (level - 1);
        let mut digit = 0u8;
        if tile.x & mask != 0 {
            digit += 1;
        }
        if tile.y & mask != 0 {
            digit += 2;
        }
        key.push((b'0' + digit) as char);
    }
    QuadKey(key)
}

/// Parses a quad key back to its tile coordinate.
///
/// This is the inverse of [`tile_to_quad_key`] and the one fallible
/// conversion: the key must consist of digits `0`-`3` and be no longer
/// than [`MAX_ZOOM`].
pub fn quad_key_to_tile(key: &str) -> Result<TileCoord, CoordError> {
    if key.len() > MAX_ZOOM as usize || !key.bytes().all(|b| (b'0'..=b'3').contains(&b)) {
        return Err(CoordError::InvalidQuadKey(key.to_string()));
    }

    let mut x = 0u32;
    let mut y = 0u32;
    for b in key.bytes() {
        x <<= 1;
        y <<= 1;
        let digit = b - b'0';
        x |= (digit & 1) as u32;
        y |= (digit >> 1) as u32;
    }

    Ok(TileCoord {
        x,
        y,
        zoom: key.len() as u8,
    })
}

/// Snaps a pointer position to the center of its covering tile.
///
/// Pointer events carry arbitrary coordinates; anchoring drag geometry on
/// tile centers keeps a drag rectangle's corners away from tile edges.
#[inline]
pub fn snap_to_tile_center(lng: f64, lat: f64, zoom: u8) -> LngLat {
    let bbox = tile_to_bbox(&point_to_tile(lng, lat, zoom));
    LngLat::new(
        (bbox.west + bbox.east) / 2.0,
        (bbox.south + bbox.north) / 2.0,
    )
}

/// Validates a geographic point against the lattice's addressable range.
pub fn validate_lng_lat(lng: f64, lat: f64) -> Result<(), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lng) {
        return Err(CoordError::InvalidLongitude(lng));
    }
    Ok(())
}

/// Validates a zoom level against the quad-key-addressable range.
pub fn validate_zoom(zoom: u8) -> Result<(), CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_city_at_zoom_16() {
        // New York City: 40.7128°N, 74.0060°W
        let tile = point_to_tile(-74.0060, 40.7128, 16);
        assert_eq!(tile.x, 19295);
        assert_eq!(tile.y, 24640);
        assert_eq!(tile.zoom, 16);
    }

    #[test]
    fn test_tile_to_bbox_contains_source_point() {
        let lng = -0.1278; // London
        let lat = 51.5074;
        let tile = point_to_tile(lng, lat, 14);
        let bbox = tile_to_bbox(&tile);

        assert!(bbox.west <= lng && lng < bbox.east);
        assert!(bbox.south <= lat && lat < bbox.north);
        assert!(bbox.north > bbox.south, "north edge must lie above south");
    }

    #[test]
    fn test_tile_to_bbox_equator_tile() {
        // At zoom 1 the northeast quadrant tile spans 0..180 lng, 0..~85 lat
        let bbox = tile_to_bbox(&TileCoord::new(1, 0, 1));
        assert!((bbox.west - 0.0).abs() < 1e-9);
        assert!((bbox.east - 180.0).abs() < 1e-9);
        assert!((bbox.south - 0.0).abs() < 1e-9);
        assert!((bbox.north - MAX_LAT).abs() < 0.001);
    }

    #[test]
    fn test_quad_key_known_value() {
        // Worked example from the Bing tile system: tile (3, 5) at zoom 3
        let key = tile_to_quad_key(&TileCoord::new(3, 5, 3));
        assert_eq!(key.as_str(), "213");
    }

    #[test]
    fn test_quad_key_zoom_zero_is_empty() {
        let key = tile_to_quad_key(&TileCoord::new(0, 0, 0));
        assert_eq!(key.as_str(), "");
        assert_eq!(key.zoom(), 0);
    }

    #[test]
    fn test_quad_key_round_trip() {
        let tile = TileCoord::new(19295, 24640, 16);
        let key = tile_to_quad_key(&tile);
        assert_eq!(key.zoom(), 16);

        let decoded = quad_key_to_tile(key.as_str()).unwrap();
        assert_eq!(decoded, tile);
    }

    #[test]
    fn test_quad_key_to_tile_rejects_bad_digits() {
        let result = quad_key_to_tile("0124");
        assert!(matches!(result, Err(CoordError::InvalidQuadKey(_))));

        let result = quad_key_to_tile("01a2");
        assert!(matches!(result, Err(CoordError::InvalidQuadKey(_))));
    }

    #[test]
    fn test_quad_key_to_tile_rejects_overlong_key() {
        let key = "0".repeat(MAX_ZOOM as usize + 1);
        let result = quad_key_to_tile(&key);
        assert!(matches!(result, Err(CoordError::InvalidQuadKey(_))));
    }

    #[test]
    fn test_snap_to_tile_center_is_idempotent() {
        let snapped = snap_to_tile_center(-0.195499, 51.52086, 22);
        let again = snap_to_tile_center(snapped.lng, snapped.lat, 22);
        assert_eq!(snapped, again);
    }

    #[test]
    fn test_snap_to_tile_center_stays_in_tile() {
        let tile = point_to_tile(9.99, 53.55, 18);
        let snapped = snap_to_tile_center(9.99, 53.55, 18);
        assert_eq!(point_to_tile(snapped.lng, snapped.lat, 18), tile);
    }

    #[test]
    fn test_validate_lng_lat() {
        assert!(validate_lng_lat(0.0, 0.0).is_ok());
        assert!(validate_lng_lat(-180.0, MAX_LAT).is_ok());
        assert!(matches!(
            validate_lng_lat(0.0, 90.0),
            Err(CoordError::InvalidLatitude(_))
        ));
        assert!(matches!(
            validate_lng_lat(181.0, 0.0),
            Err(CoordError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_validate_zoom() {
        assert!(validate_zoom(0).is_ok());
        assert!(validate_zoom(MAX_ZOOM).is_ok());
        assert!(matches!(
            validate_zoom(MAX_ZOOM + 1),
            Err(CoordError::InvalidZoom(_))
        ));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_quad_key_bijective_with_tile(
                x_raw in 0u32..1 << 23,
                y_raw in 0u32..1 << 23,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let max_coord = 1u32 << zoom;
                let tile = TileCoord::new(x_raw % max_coord, y_raw % max_coord, zoom);

                let key = tile_to_quad_key(&tile);
                prop_assert_eq!(key.zoom(), zoom, "key length must equal zoom");

                let decoded = quad_key_to_tile(key.as_str())?;
                prop_assert_eq!(decoded, tile);
            }

            #[test]
            fn test_point_to_tile_in_bounds(
                lat in -85.05..85.05_f64,
                lng in -180.0..180.0_f64,
                zoom in 0u8..=MAX_ZOOM
            ) {
                let tile = point_to_tile(lng, lat, zoom);
                let max_coord = 1u32 << zoom;

                prop_assert!(tile.x < max_coord, "x {} exceeds {} at zoom {}", tile.x, max_coord, zoom);
                prop_assert!(tile.y < max_coord, "y {} exceeds {} at zoom {}", tile.y, max_coord, zoom);
            }

            #[test]
            fn test_bbox_round_trip(
                lat in -85.0..85.0_f64,
                lng in -180.0..179.99_f64,
                zoom in 1u8..=20
            ) {
                // Any point inside a tile's bbox must resolve back to that tile
                let tile = point_to_tile(lng, lat, zoom);
                let bbox = tile_to_bbox(&tile);
                let center = snap_to_tile_center(lng, lat, zoom);

                prop_assert!(bbox.west <= center.lng && center.lng < bbox.east);
                prop_assert!(bbox.south < center.lat && center.lat < bbox.north);
                prop_assert_eq!(point_to_tile(center.lng, center.lat, zoom), tile);
            }

            #[test]
            fn test_longitude_monotonic(
                lat in 0.0..1.0_f64,
                lng1 in -180.0..-90.0_f64,
                lng2 in -90.0..0.0_f64,
                zoom in 10u8..=15
            ) {
                // For fixed latitude, increasing longitude must not decrease x
                let tile1 = point_to_tile(lng1, lat, zoom);
                let tile2 = point_to_tile(lng2, lat, zoom);
                prop_assert!(tile1.x < tile2.x);
            }
        }
    }
}
