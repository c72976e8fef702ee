use crate::core::bounds::BoundingBox;
use crate::core::constants::WORLD_TILE_SIZE;
use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// The current view of the map: center, zoom, and screen dimensions.
///
/// Every mutator keeps `zoom` inside `[min_zoom, max_zoom]` and the center
/// inside `max_bounds` (when set), so a `Viewport` handed out by the
/// controller is always a committed, constrained one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
    /// Region the center is confined to
    max_bounds: Option<BoundingBox>,
}

impl Viewport {
    /// Creates a new, unconstrained viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 22.0),
            size,
            min_zoom: 0.0,
            max_zoom: 22.0,
            max_bounds: None,
        }
    }

    /// Sets the region the center is confined to and re-applies it
    pub fn set_max_bounds(&mut self, bounds: Option<BoundingBox>) {
        self.max_bounds = bounds;
        self.center = self.clamp_center(self.center);
    }

    /// Sets the zoom limits and re-applies them
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Sets the center of the viewport with bounds checking.
    /// A non-finite center is ignored.
    pub fn set_center(&mut self, center: LatLng) {
        if !center.is_finite() {
            return;
        }
        self.center = self.clamp_center(center);
    }

    /// Sets the zoom level, clamping to valid range. A non-finite zoom is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets center and zoom in one step: zoom is clamped first, then the
    /// center is clamped per axis into the bounds. If either is not finite
    /// the viewport is left as it was.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        if !center.is_finite() || !zoom.is_finite() {
            return;
        }
        self.set_zoom(zoom);
        self.set_center(center);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        if !size.is_finite() {
            return;
        }
        self.size = size;
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let world_size = WORLD_TILE_SIZE * 2_f64.powf(z);
        lat_lng.to_unit_mercator().multiply(world_size)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let world_size = WORLD_TILE_SIZE * 2_f64.powf(z);
        LatLng::from_unit_mercator(pixel.multiply(1.0 / world_size))
    }

    /// Converts a geographical coordinate to screen pixel coordinates (container relative)
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let offset = self
            .project(lat_lng, None)
            .subtract(&self.project(&self.center, None));
        offset.add(&self.half_size())
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let world = self
            .project(&self.center, None)
            .add(&pixel.subtract(&self.half_size()));
        self.unproject(&world, None)
    }

    /// Pans the viewport by a drag delta in pixels. Dragging content to the
    /// right moves the center to the west. Returns the applied delta, which
    /// is smaller than requested when the bounds stop the center.
    pub fn pan(&mut self, delta: Point) -> Point {
        let before = self.project(&self.center, None);
        self.shift_center(delta.multiply(-1.0));
        let after = self.project(&self.center, None);
        before.subtract(&after)
    }

    /// Zooms the viewport to a specific level, optionally keeping the
    /// geographic point under `focus_point` stationary on screen.
    pub fn zoom_to(&mut self, zoom: f64, focus_point: Option<Point>) {
        if !zoom.is_finite() || focus_point.is_some_and(|p| !p.is_finite()) {
            return;
        }
        let new_zoom = zoom.clamp(self.min_zoom, self.max_zoom);

        // No-op if zoom does not change significantly
        if (new_zoom - self.zoom).abs() < 1e-6 {
            return;
        }

        match focus_point {
            Some(focus_screen) => {
                let focus_lat_lng = self.pixel_to_lat_lng(&focus_screen);
                self.zoom = new_zoom;

                // Where the focus point drifted to; move the center along with it
                let drifted = self.lat_lng_to_pixel(&focus_lat_lng);
                self.shift_center(drifted.subtract(&focus_screen));
            }
            None => self.zoom = new_zoom,
        }
    }

    /// Gets the current viewport bounds in geographical coordinates.
    ///
    /// Screen corner (0, 0) unprojects to (west, north) and
    /// (width, height) to (east, south).
    pub fn bounds(&self) -> BoundingBox {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&self.size);

        BoundingBox::new(nw.lat, se.lat, se.lng, nw.lng)
    }

    fn half_size(&self) -> Point {
        self.size.multiply(0.5)
    }

    fn shift_center(&mut self, offset: Point) {
        let world = self.project(&self.center, None).add(&offset);
        let center = self.unproject(&world, None);
        self.set_center(center);
    }

    /// Clamps center to world bounds or max_bounds if set
    fn clamp_center(&self, center: LatLng) -> LatLng {
        match &self.max_bounds {
            Some(bounds) => bounds.clamp(&center),
            None => LatLng::new(LatLng::clamp_lat(center.lat), center.lng.clamp(-180.0, 180.0)),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::REGION;

    fn warsaw() -> Viewport {
        Viewport::new(
            LatLng::new(52.2297, 21.0122),
            14.0,
            Point::new(1000.0, 1000.0),
        )
    }

    #[test]
    fn test_viewport_creation() {
        let viewport = warsaw();
        assert_eq!(viewport.zoom, 14.0);
        assert_eq!(viewport.center.lat, 52.2297);
        assert_eq!(viewport.size.x, 1000.0);
    }

    #[test]
    fn test_coordinate_conversion() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let center_lat_lng = viewport.pixel_to_lat_lng(&Point::new(256.0, 256.0));
        assert!(center_lat_lng.lat.abs() < 1e-9);
        assert!(center_lat_lng.lng.abs() < 1e-9);

        let back = viewport.lat_lng_to_pixel(&center_lat_lng);
        assert!((back.x - 256.0).abs() < 1e-6);
        assert!((back.y - 256.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_orientation() {
        for zoom in [14.0, 14.5, 15.3, 18.0] {
            let mut viewport = warsaw();
            viewport.set_zoom(zoom);
            let bounds = viewport.bounds();
            assert!(bounds.west < bounds.east);
            assert!(bounds.south < bounds.north);
            assert!(bounds.contains(&viewport.center));
        }
    }

    #[test]
    fn test_bounds_span_matches_scale() {
        // At zoom z the world is 512 * 2^z px wide, so 1000px covers
        // 1000 / (512 * 2^14) of 360 degrees.
        let bounds = warsaw().bounds();
        let expected = 1000.0 / (512.0 * 2_f64.powi(14)) * 360.0;
        assert!((bounds.width() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(14.0, 18.0);

        viewport.set_zoom(1.0);
        assert_eq!(viewport.zoom, 14.0);

        viewport.set_zoom(20.0);
        assert_eq!(viewport.zoom, 18.0);
    }

    #[test]
    fn test_center_clamped_to_max_bounds() {
        let mut viewport = warsaw();
        viewport.set_max_bounds(Some(REGION));

        viewport.set_center(LatLng::new(52.0, 100.0));
        assert_eq!(viewport.center.lng, 24.15);
        assert_eq!(viewport.center.lat, 52.0);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut viewport = warsaw();
        viewport.set_max_bounds(Some(REGION));
        let before = viewport.clone();

        viewport.set_zoom(f64::NAN);
        viewport.set_center(LatLng::new(f64::NAN, 21.0));
        viewport.set_view(LatLng::new(52.0, 20.0), f64::INFINITY);
        viewport.zoom_to(f64::NAN, None);
        viewport.zoom_to(15.0, Some(Point::new(f64::NAN, 0.0)));
        viewport.pan(Point::new(f64::NAN, 0.0));
        viewport.set_size(Point::new(f64::NAN, 100.0));
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_pan() {
        let mut viewport = warsaw();
        let original_center = viewport.center;

        // Dragging content right and down moves the center north-west
        let applied = viewport.pan(Point::new(10.0, 10.0));
        assert!(viewport.center.lng < original_center.lng);
        assert!(viewport.center.lat > original_center.lat);
        assert!((applied.x - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_stopped_by_bounds() {
        let mut viewport = Viewport::new(
            LatLng::new(52.0, 24.15),
            14.0,
            Point::new(1000.0, 1000.0),
        );
        viewport.set_max_bounds(Some(REGION));

        // Dragging content left would move the center east, past the edge
        let applied = viewport.pan(Point::new(-200.0, 0.0));
        assert_eq!(viewport.center.lng, 24.15);
        assert!(applied.x.abs() < 1e-6);
    }

    #[test]
    fn test_zoom_around_focus_point() {
        let mut viewport = warsaw();
        let focus = Point::new(800.0, 300.0);
        let anchored = viewport.pixel_to_lat_lng(&focus);

        viewport.zoom_to(15.0, Some(focus));

        let after = viewport.lat_lng_to_pixel(&anchored);
        assert_eq!(viewport.zoom, 15.0);
        assert!((after.x - focus.x).abs() < 1e-3);
        assert!((after.y - focus.y).abs() < 1e-3);
    }
}
