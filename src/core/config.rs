//! Configuration for the scouting map and its backend.
//!
//! Defaults describe the Poland deployment; the associated constructors give
//! ready-made variants in the same spirit as performance profiles.

use crate::core::bounds::BoundingBox;
use crate::core::constants::*;
use crate::core::geo::{LatLng, Point};
use crate::hex::resolver::Containment;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Region the viewport center is confined to
    pub region: BoundingBox,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_center: LatLng,
    pub initial_zoom: f64,
    pub initial_size: Point,
    /// Quiet period before a zoom change re-resolves the hexagon grid
    pub zoom_debounce: Duration,
    /// Zoom applied by a coordinate search jump
    pub search_zoom: f64,
    /// Zoom per wheel delta unit while ctrl/cmd is held
    pub modifier_wheel_sensitivity: f64,
    /// Zoom per wheel delta unit for the plain wheel
    pub wheel_zoom_rate: f64,
    /// How hexagons are matched against the viewport polygon
    pub containment: Containment,
    pub api: ApiConfig,
}

impl MapConfig {
    /// Same map, zoom changes resolve immediately. Useful for scripted drivers.
    pub fn without_debounce() -> Self {
        Self {
            zoom_debounce: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Builds the config with an explicit backend
    pub fn with_api(api: ApiConfig) -> Self {
        Self {
            api,
            ..Self::default()
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            region: REGION,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            initial_center: LatLng::new(INITIAL_CENTER.1, INITIAL_CENTER.0),
            initial_zoom: INITIAL_ZOOM,
            initial_size: Point::new(INITIAL_SIZE.0, INITIAL_SIZE.1),
            zoom_debounce: Duration::from_millis(ZOOM_DEBOUNCE_MS),
            search_zoom: SEARCH_ZOOM,
            modifier_wheel_sensitivity: MODIFIER_WHEEL_SENSITIVITY,
            wheel_zoom_rate: WHEEL_ZOOM_RATE,
            containment: Containment::default(),
            api: ApiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme + host (+ port) of the scoring backend, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Reads the backend location from `HEXSCOUT_API_URL`, falling back to the default
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Full URL for an endpoint path such as `/api/obszar`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("hexscout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.region, REGION);
        assert_eq!(config.min_zoom, 14.0);
        assert_eq!(config.max_zoom, 18.0);
        assert_eq!(config.initial_center, LatLng::new(52.2297, 21.0122));
        assert_eq!(config.zoom_debounce, Duration::from_millis(150));
        assert_eq!(config.search_zoom, 14.0);
    }

    #[test]
    fn test_api_endpoint() {
        let api = ApiConfig::new("http://scoring.local:9000/");
        assert_eq!(api.base_url, "http://scoring.local:9000");
        assert_eq!(
            api.endpoint("/api/obszar"),
            "http://scoring.local:9000/api/obszar"
        );
        assert_eq!(
            ApiConfig::default().endpoint("/api/paczkomaty"),
            "http://localhost:8000/api/paczkomaty"
        );
    }

    #[test]
    fn test_without_debounce() {
        let config = MapConfig::without_debounce();
        assert_eq!(config.zoom_debounce, Duration::ZERO);
        assert_eq!(config.max_zoom, 18.0);
    }
}
