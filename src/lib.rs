//! # hexscout
//!
//! Interactive hexagon-grid map logic for scouting locations in Poland.
//!
//! The visible map area is covered with H3 hexagons whose resolution follows
//! the zoom level. Selecting a hexagon fetches an area score for it from a
//! scoring backend, and nearby parcel lockers can be overlaid as markers.
//! Rendering is left to the host: this crate owns the viewport, the grid,
//! the selection, and the data fetched for them.

pub mod api;
pub mod core;
pub mod details;
pub mod hex;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod runtime;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    bounds::BoundingBox,
    config::{ApiConfig, MapConfig},
    geo::{LatLng, Point},
    map::MapController,
    viewport::Viewport,
};

pub use api::{AreaScore, HttpLocationApi, LocationApi, ParcelLocker};

pub use details::{DetailFetcher, DetailState};

pub use hex::{hexagons_for_bounds, resolution_for_zoom, HexagonId, HexagonSet};

pub use input::{events::InputEvent, search::SearchBox};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid hexagon: {0}")]
    InvalidHexagon(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initialize `env_logger` once; later calls are ignored
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
