//! `select` command: simulate a drag selection between two points.
//!
//! Runs the same state machine the interactive control drives: activate at
//! the anchor, move to the corner, activate again to commit.

use clap::Args;
use tileselect::control::{DEFAULT_MAX_TILE, DEFAULT_ZOOM_LEVEL};
use tileselect::coord::snap_to_tile_center;
use tileselect::geojson::FeatureCollection;
use tileselect::grid::GridBuilder;
use tileselect::selection::{DrawUpdate, SelectionTracker};

use super::common;
use crate::error::CliError;

/// Arguments for the `select` command.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Drag anchor as lng,lat
    #[arg(long, value_name = "LNG,LAT")]
    pub anchor: String,

    /// Drag corner as lng,lat
    #[arg(long, value_name = "LNG,LAT")]
    pub corner: String,

    /// Tile lattice zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM_LEVEL)]
    pub zoom: u8,

    /// Selection capacity
    #[arg(long, default_value_t = DEFAULT_MAX_TILE)]
    pub max_tile: usize,

    /// Print quad keys, one per line, instead of GeoJSON
    #[arg(long)]
    pub keys: bool,
}

/// Print the committed selection on stdout and a status line on stderr.
pub fn run(args: SelectArgs) -> Result<(), CliError> {
    let anchor = common::parse_lng_lat(&args.anchor)?;
    let corner = common::parse_lng_lat(&args.corner)?;
    let zoom = common::check_zoom(args.zoom)?;

    let mut tracker = SelectionTracker::new(GridBuilder::new(zoom), args.max_tile);

    let anchor = snap_to_tile_center(anchor.lng, anchor.lat, zoom);
    let corner = snap_to_tile_center(corner.lng, corner.lat, zoom);

    tracker.activate(anchor);
    match tracker.pointer_move(corner)? {
        DrawUpdate::Rejected { candidate_total } => {
            tracing::warn!(
                candidate_total,
                max_tile = args.max_tile,
                "drag exceeds capacity, selection limited to the anchor tile"
            );
        }
        DrawUpdate::Idle | DrawUpdate::Unchanged | DrawUpdate::Updated { .. } => {}
    }
    tracker.activate(corner);

    let selected = tracker.selected();
    if args.keys {
        for key in selected.quad_keys() {
            println!("{}", key);
        }
    } else {
        let fc = FeatureCollection::from(selected.collection());
        let json = fc
            .to_json_string()
            .map_err(|e| CliError::Json(e.to_string()))?;
        println!("{}", json);
    }

    match selected.len() {
        0 => eprintln!("No Tiles Selected."),
        count => eprintln!("{}/{} Tiles Selected.", count, args.max_tile),
    }
    Ok(())
}
