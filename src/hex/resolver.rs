use crate::core::bounds::BoundingBox;
use crate::hex::cell::HexagonId;
use crate::prelude::HashSet;
use crate::{Error, Result};
use geo_types::{Coord, LineString, Polygon};
use h3o::geom::{ContainmentMode, PolyfillConfig, Polygon as CellPolygon, ToCells};
use h3o::Resolution;

/// How cells are matched against the viewport polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Containment {
    /// Every cell whose outline touches the polygon
    #[default]
    Intersects,
    /// Only cells whose centroid falls inside the polygon
    Centroid,
}

impl From<Containment> for ContainmentMode {
    fn from(containment: Containment) -> Self {
        match containment {
            Containment::Intersects => ContainmentMode::IntersectsBoundary,
            Containment::Centroid => ContainmentMode::ContainsCentroid,
        }
    }
}

/// The hexagons covering one bounding box at one resolution.
///
/// Ids are unique and kept in ascending order, so two sets resolved from the
/// same input compare equal.
#[derive(Debug, Clone, Default)]
pub struct HexagonSet {
    resolution: Option<Resolution>,
    cells: Vec<HexagonId>,
    index: HashSet<HexagonId>,
}

impl HexagonSet {
    fn from_cells(resolution: Resolution, mut cells: Vec<HexagonId>) -> Self {
        cells.sort_unstable();
        cells.dedup();
        let index = cells.iter().copied().collect();
        Self {
            resolution: Some(resolution),
            cells,
            index,
        }
    }

    /// Resolution the set was computed at; `None` for the empty default
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn contains(&self, id: &HexagonId) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexagonId> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[HexagonId] {
        &self.cells
    }
}

impl PartialEq for HexagonSet {
    fn eq(&self, other: &Self) -> bool {
        self.resolution == other.resolution && self.cells == other.cells
    }
}

impl Eq for HexagonSet {}

/// Resolves the hexagons covering `bounds` at `resolution`.
///
/// The box is handed to the indexer as the closed quadrilateral
/// north-west, north-east, south-east, south-west.
pub fn hexagons_for_bounds(
    bounds: &BoundingBox,
    resolution: Resolution,
    containment: Containment,
) -> Result<HexagonSet> {
    if !bounds.is_valid() {
        return Err(Error::InvalidGeometry(format!(
            "bounding box is not a valid area: {bounds:?}"
        )));
    }

    let ring: Vec<Coord<f64>> = bounds
        .corners()
        .iter()
        .map(|corner| Coord {
            x: corner.lng,
            y: corner.lat,
        })
        .collect();
    let polygon = CellPolygon::from_degrees(Polygon::new(LineString::from(ring), Vec::new()))
        .map_err(|e| Error::InvalidGeometry(e.to_string()))?;

    let config = PolyfillConfig::new(resolution).containment_mode(containment.into());
    let cells = polygon.to_cells(config).map(HexagonId::from).collect();

    let set = HexagonSet::from_cells(resolution, cells);
    log::debug!(
        "resolved {} hexagons at resolution {} for {:?}",
        set.len(),
        u8::from(resolution),
        bounds
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warsaw_box() -> BoundingBox {
        BoundingBox::new(52.2397, 52.2197, 21.0272, 20.9972)
    }

    #[test]
    fn test_resolution_recorded() {
        let set = hexagons_for_bounds(&warsaw_box(), Resolution::Nine, Containment::Intersects)
            .unwrap();
        assert_eq!(set.resolution(), Some(Resolution::Nine));
        assert!(!set.is_empty());
        assert!(set.iter().all(|id| id.resolution() == Resolution::Nine));
    }

    #[test]
    fn test_deterministic() {
        let a = hexagons_for_bounds(&warsaw_box(), Resolution::Ten, Containment::Intersects)
            .unwrap();
        let b = hexagons_for_bounds(&warsaw_box(), Resolution::Ten, Containment::Intersects)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_finer_resolution_yields_more_cells() {
        let coarse = hexagons_for_bounds(&warsaw_box(), Resolution::Eight, Containment::Intersects)
            .unwrap();
        let fine = hexagons_for_bounds(&warsaw_box(), Resolution::Ten, Containment::Intersects)
            .unwrap();
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_center_cell_is_covered() {
        let bounds = warsaw_box();
        let set = hexagons_for_bounds(&bounds, Resolution::Nine, Containment::Intersects).unwrap();
        let center = HexagonId::from_lat_lng(&bounds.center(), Resolution::Nine).unwrap();
        assert!(set.contains(&center));
    }

    #[test]
    fn test_intersects_covers_centroid_mode() {
        let bounds = warsaw_box();
        let loose = hexagons_for_bounds(&bounds, Resolution::Nine, Containment::Intersects)
            .unwrap();
        let strict = hexagons_for_bounds(&bounds, Resolution::Nine, Containment::Centroid)
            .unwrap();
        assert!(strict.len() <= loose.len());
        assert!(strict.iter().all(|id| loose.contains(id)));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let bounds = BoundingBox::new(f64::NAN, 52.0, 21.0, 20.0);
        let result = hexagons_for_bounds(&bounds, Resolution::Nine, Containment::Intersects);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));

        let inverted = BoundingBox::new(52.0, 53.0, 21.0, 20.0);
        let result = hexagons_for_bounds(&inverted, Resolution::Nine, Containment::Intersects);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }
}
