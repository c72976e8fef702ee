use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Axis-aligned geographic rectangle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its four edges
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Gets the width in degrees of longitude
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Gets the height in degrees of latitude
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Gets the center point of the box
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Checks if the box contains a point (edges inclusive)
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    /// Clamps a point into the box, independently per axis
    pub fn clamp(&self, point: &LatLng) -> LatLng {
        LatLng::new(
            point.lat.clamp(self.south, self.north),
            point.lng.clamp(self.west, self.east),
        )
    }

    /// Checks that every edge is finite and south <= north, west <= east
    pub fn is_valid(&self) -> bool {
        [self.north, self.south, self.east, self.west]
            .iter()
            .all(|v| v.is_finite())
            && self.south <= self.north
            && self.west <= self.east
    }

    /// The four corners in polygon winding order:
    /// north-west, north-east, south-east, south-west
    pub fn corners(&self) -> [LatLng; 4] {
        [
            LatLng::new(self.north, self.west),
            LatLng::new(self.north, self.east),
            LatLng::new(self.south, self.east),
            LatLng::new(self.south, self.west),
        ]
    }
}
