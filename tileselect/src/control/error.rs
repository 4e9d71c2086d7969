//! Control error types.

use std::fmt;

use crate::grid::GridError;

/// Errors that can occur while driving the control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    /// The control is not attached to a map surface. Raised when a
    /// lifecycle handler runs before `on_add` or after `on_remove`; the
    /// triggering call aborts and the control stays usable once attached.
    NotAttached,

    /// Grid geometry computation failed.
    Grid(GridError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::NotAttached => {
                write!(f, "control is not attached to a map surface")
            }
            ControlError::Grid(e) => {
                write!(f, "grid computation failed: {}", e)
            }
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControlError::NotAttached => None,
            ControlError::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for ControlError {
    fn from(e: GridError) -> Self {
        ControlError::Grid(e)
    }
}
