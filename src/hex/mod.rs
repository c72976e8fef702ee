//! Hexagon grid plumbing: cell ids, zoom to resolution mapping, and
//! resolving the cells that cover a bounding box.

pub mod cell;
pub mod resolution;
pub mod resolver;

pub use cell::HexagonId;
pub use resolution::resolution_for_zoom;
pub use resolver::{hexagons_for_bounds, Containment, HexagonSet};
