//! CLI error types.

use std::fmt;

use tileselect::coord::CoordError;
use tileselect::grid::GridError;

/// Errors reported to the terminal.
#[derive(Debug)]
pub enum CliError {
    /// An argument could not be parsed.
    Args(String),

    /// A coordinate argument failed validation.
    Coord(CoordError),

    /// Grid geometry computation failed.
    Grid(GridError),

    /// Output serialization failed.
    Json(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Args(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Coord(e) => write!(f, "{}", e),
            CliError::Grid(e) => write!(f, "Grid computation failed: {}", e),
            CliError::Json(msg) => write!(f, "Failed to serialize output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coord(e) => Some(e),
            CliError::Grid(e) => Some(e),
            CliError::Args(_) | CliError::Json(_) => None,
        }
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        CliError::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_error_display() {
        let err = CliError::Args("expected LNG,LAT".to_string());
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_coord_error_passes_through() {
        let err: CliError = CoordError::InvalidZoom(42).into();
        assert!(err.to_string().contains("Invalid zoom level"));
    }
}
