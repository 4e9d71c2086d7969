//! Map surface abstraction.
//!
//! The interface the control needs from the host map renderer. Kept to a
//! trait so hosts can adapt any renderer and tests can record the calls.

use crate::geojson::FeatureCollection;

use super::config::LayerSpec;
use super::events::ViewportContext;

/// Host renderer operations consumed by the control.
pub trait MapSurface {
    /// Current viewport bounds and zoom.
    fn viewport(&self) -> ViewportContext;

    /// Establish a named fill layer with an initially supplied collection.
    fn add_layer(&mut self, spec: &LayerSpec, initial: &FeatureCollection);

    /// Replace the data of a named layer's source.
    fn set_layer_data(&mut self, layer_id: &str, data: &FeatureCollection);
}
