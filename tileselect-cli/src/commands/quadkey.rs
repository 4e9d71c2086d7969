//! `quadkey` command: convert between points and quad keys.

use clap::Args;
use tileselect::control::DEFAULT_ZOOM_LEVEL;
use tileselect::coord::{point_to_tile, quad_key_to_tile, tile_to_bbox, tile_to_quad_key};

use super::common;
use crate::error::CliError;

/// Arguments for the `quadkey` command.
#[derive(Debug, Args)]
pub struct QuadkeyArgs {
    /// Point to encode as lng,lat
    #[arg(
        long,
        value_name = "LNG,LAT",
        conflicts_with = "decode",
        required_unless_present = "decode"
    )]
    pub point: Option<String>,

    /// Tile lattice zoom level for encoding
    #[arg(long, default_value_t = DEFAULT_ZOOM_LEVEL)]
    pub zoom: u8,

    /// Quad key to decode back to a tile
    #[arg(long, value_name = "KEY")]
    pub decode: Option<String>,
}

/// Encode a point or decode a quad key.
pub fn run(args: QuadkeyArgs) -> Result<(), CliError> {
    if let Some(key) = args.decode {
        let tile = quad_key_to_tile(&key)?;
        let bbox = tile_to_bbox(&tile);
        println!("tile: {}", tile);
        println!("bbox: {},{},{},{}", bbox.west, bbox.south, bbox.east, bbox.north);
        return Ok(());
    }

    let point = args
        .point
        .ok_or_else(|| CliError::Args("either --point or --decode is required".to_string()))?;
    let point = common::parse_lng_lat(&point)?;
    let zoom = common::check_zoom(args.zoom)?;

    let tile = point_to_tile(point.lng, point.lat, zoom);
    println!("{}", tile_to_quad_key(&tile));
    Ok(())
}
