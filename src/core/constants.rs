//! Fixed design constants for the scouting map.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use crate::core::bounds::BoundingBox;

/// World size in pixels at zoom 0, matching 512px vector tiles.
pub const WORLD_TILE_SIZE: f64 = 512.0;

/// The region the map is confined to (Poland).
pub const REGION: BoundingBox = BoundingBox {
    north: 54.9,
    south: 49.0,
    west: 14.12,
    east: 24.15,
};

/// Lowest zoom the viewport may reach.
pub const MIN_ZOOM: f64 = 14.0;

/// Highest zoom the viewport may reach.
pub const MAX_ZOOM: f64 = 18.0;

/// Initial map center (Warsaw) as (longitude, latitude).
pub const INITIAL_CENTER: (f64, f64) = (21.0122, 52.2297);

/// Initial zoom level.
pub const INITIAL_ZOOM: f64 = 14.0;

/// Initial pixel size before the first resize event arrives.
pub const INITIAL_SIZE: (f64, f64) = (1000.0, 1000.0);

/// Quiet period before a zoom change is considered settled.
pub const ZOOM_DEBOUNCE_MS: u64 = 150;

/// Zoom applied when jumping to a searched coordinate.
pub const SEARCH_ZOOM: f64 = 14.0;

/// Zoom per wheel delta unit for ctrl/cmd + wheel.
pub const MODIFIER_WHEEL_SENSITIVITY: f64 = 0.01;

/// Zoom per wheel delta unit for the plain wheel.
pub const WHEEL_ZOOM_RATE: f64 = 1.0 / 450.0;

/// Default backend serving `/api/obszar` and `/api/paczkomaty`.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "HEXSCOUT_API_URL";

/// Outline colour of every hexagon.
pub const HEX_LINE_COLOR: [u8; 3] = [0, 0, 0];

/// Fill of an unselected hexagon (RGBA). Nearly transparent but still pickable.
pub const HEX_FILL_COLOR: [u8; 4] = [0, 0, 0, 1];

/// Fill of the selected hexagon (RGBA).
pub const HEX_SELECTED_FILL_COLOR: [u8; 4] = [242, 141, 59, 100];
