//! Shared argument parsing for CLI commands.

use tileselect::coord::{validate_lng_lat, validate_zoom, GeoRect, LngLat};

use crate::error::CliError;

/// Parse a `LNG,LAT` argument and validate it against the lattice range.
pub fn parse_lng_lat(s: &str) -> Result<LngLat, CliError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(CliError::Args(format!("expected LNG,LAT, got '{}'", s)));
    }
    let lng = parse_degrees(parts[0])?;
    let lat = parse_degrees(parts[1])?;
    validate_lng_lat(lng, lat)?;
    Ok(LngLat::new(lng, lat))
}

/// Parse a `W,S,E,N` bounding-box argument.
pub fn parse_bbox(s: &str) -> Result<GeoRect, CliError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(CliError::Args(format!("expected W,S,E,N, got '{}'", s)));
    }
    let west = parse_degrees(parts[0])?;
    let south = parse_degrees(parts[1])?;
    let east = parse_degrees(parts[2])?;
    let north = parse_degrees(parts[3])?;
    validate_lng_lat(west, south)?;
    validate_lng_lat(east, north)?;
    Ok(GeoRect::new(west, south, east, north)?)
}

/// Validate a zoom argument against the quad-key-addressable range.
pub fn check_zoom(zoom: u8) -> Result<u8, CliError> {
    validate_zoom(zoom)?;
    Ok(zoom)
}

fn parse_degrees(s: &str) -> Result<f64, CliError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CliError::Args(format!("'{}' is not a number", s.trim())))
}
