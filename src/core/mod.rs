pub mod bounds;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;
pub mod viewport;

pub use bounds::BoundingBox;
pub use config::{ApiConfig, MapConfig};
pub use geo::{LatLng, Point};
pub use map::MapController;
pub use viewport::Viewport;
