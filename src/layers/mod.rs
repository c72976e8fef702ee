//! Render-ready layer models. Drawing them is left to the host UI.

pub mod base;
pub mod hexagon;
pub mod marker;

pub use base::{LayerProperties, LayerType};
pub use hexagon::{HexagonFeature, HexagonLayer};
pub use marker::{Marker, MarkerLayer};
