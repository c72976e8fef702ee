//! Coordinate search box: keystroke filtering and submit validation.

use crate::core::bounds::BoundingBox;
use crate::core::config::MapConfig;
use crate::core::geo::LatLng;

/// Why a search was rejected. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("{field} is not a number: {input:?}")]
    InvalidNumber { field: SearchField, input: String },

    #[error("coordinates must lie within the map region (longitude {west}..{east}, latitude {south}..{north})")]
    OutsideRegion {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Longitude,
    Latitude,
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Longitude => write!(f, "longitude"),
            SearchField::Latitude => write!(f, "latitude"),
        }
    }
}

/// Request to move the map to a searched point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchJump {
    pub center: LatLng,
    pub zoom: f64,
}

/// Accepts text made of an optional leading minus, digits, and at most one
/// dot. Partial input such as `-`, `.` or `52.` passes; it is the submit
/// step that rejects what does not parse.
pub fn is_numeric_input(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut seen_dot = false;
    digits.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

/// Pending text of the two coordinate fields
#[derive(Debug, Clone)]
pub struct SearchBox {
    longitude: String,
    latitude: String,
    region: BoundingBox,
    jump_zoom: f64,
}

impl SearchBox {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            longitude: String::new(),
            latitude: String::new(),
            region: config.region,
            jump_zoom: config.search_zoom,
        }
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Replace a field's text as typed. Text that is not numeric is dropped
    /// and the field keeps its previous value; returns whether it was accepted.
    pub fn edit(&mut self, field: SearchField, text: &str) -> bool {
        if !is_numeric_input(text) {
            log::debug!("ignoring non-numeric {field} input {text:?}");
            return false;
        }
        let target = match field {
            SearchField::Longitude => &mut self.longitude,
            SearchField::Latitude => &mut self.latitude,
        };
        target.clear();
        target.push_str(text);
        true
    }

    /// Validate the pending text and produce a jump request
    pub fn submit(&self) -> Result<SearchJump, SearchError> {
        validate(
            &self.longitude,
            &self.latitude,
            &self.region,
            self.jump_zoom,
        )
    }
}

/// Parses and range-checks a longitude/latitude pair against `region`
pub fn validate(
    longitude: &str,
    latitude: &str,
    region: &BoundingBox,
    jump_zoom: f64,
) -> Result<SearchJump, SearchError> {
    let lng = parse_field(SearchField::Longitude, longitude)?;
    let lat = parse_field(SearchField::Latitude, latitude)?;
    let center = LatLng::new(lat, lng);

    if !region.contains(&center) {
        return Err(SearchError::OutsideRegion {
            north: region.north,
            south: region.south,
            east: region.east,
            west: region.west,
        });
    }

    Ok(SearchJump {
        center,
        zoom: jump_zoom,
    })
}

fn parse_field(field: SearchField, input: &str) -> Result<f64, SearchError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SearchError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}
