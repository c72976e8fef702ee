use crate::core::geo::LatLng;
use crate::{Error, Result};
use h3o::{CellIndex, Resolution};
use std::fmt;
use std::str::FromStr;

/// One cell of the global hexagon grid.
///
/// Rendered and exchanged as its canonical lowercase hex string
/// (e.g. `8a1f53c6d52ffff`); two ids are equal exactly when their strings are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexagonId(CellIndex);

impl HexagonId {
    /// The cell of the given resolution that contains `point`
    pub fn from_lat_lng(point: &LatLng, resolution: Resolution) -> Result<Self> {
        let ll = h3o::LatLng::new(point.lat, point.lng)
            .map_err(|e| Error::InvalidCoordinates(e.to_string()))?;
        Ok(Self(ll.to_cell(resolution)))
    }

    pub fn cell(&self) -> CellIndex {
        self.0
    }

    pub fn resolution(&self) -> Resolution {
        self.0.resolution()
    }

    /// Geographic center of the cell
    pub fn center(&self) -> LatLng {
        let ll = h3o::LatLng::from(self.0);
        LatLng::new(ll.lat(), ll.lng())
    }

    /// Area query radius for this cell: the average edge length at its
    /// resolution, rounded to whole meters.
    pub fn radius_meters(&self) -> u32 {
        self.resolution().edge_length_m().round() as u32
    }
}

impl From<CellIndex> for HexagonId {
    fn from(cell: CellIndex) -> Self {
        Self(cell)
    }
}

impl FromStr for HexagonId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<CellIndex>()
            .map(Self)
            .map_err(|e| Error::InvalidHexagon(format!("{s}: {e}")))
    }
}

impl fmt::Display for HexagonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
