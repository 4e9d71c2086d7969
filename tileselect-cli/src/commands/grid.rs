//! `grid` command: compute the tile grid covering a bounding box.

use clap::Args;
use tileselect::control::DEFAULT_ZOOM_LEVEL;
use tileselect::geojson::FeatureCollection;
use tileselect::grid::{GridBuilder, SweepStrategy};

use super::common;
use crate::error::CliError;

/// Arguments for the `grid` command.
#[derive(Debug, Args)]
pub struct GridArgs {
    /// Bounding box as west,south,east,north in degrees
    #[arg(long, value_name = "W,S,E,N")]
    pub bbox: String,

    /// Tile lattice zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM_LEVEL)]
    pub zoom: u8,

    /// Recompute the sweep step at each latitude row
    #[arg(long)]
    pub per_row: bool,
}

/// Print the covering grid as GeoJSON on stdout.
pub fn run(args: GridArgs) -> Result<(), CliError> {
    let rect = common::parse_bbox(&args.bbox)?;
    let zoom = common::check_zoom(args.zoom)?;
    let strategy = if args.per_row {
        SweepStrategy::PerRowStep
    } else {
        SweepStrategy::UniformStep
    };

    let builder = GridBuilder::new(zoom).with_strategy(strategy);
    let grid = builder.cover(&rect)?;
    tracing::debug!(tiles = grid.len(), zoom, "grid computed");

    let fc = FeatureCollection::from(&grid);
    let json = fc
        .to_json_string()
        .map_err(|e| CliError::Json(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
