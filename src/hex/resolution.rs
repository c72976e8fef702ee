use h3o::Resolution;

/// Zoom at and above which the finest grid is used.
pub const FINE_ZOOM: f64 = 15.0;

/// Zoom at and above which the medium grid is used.
pub const MEDIUM_ZOOM: f64 = 14.5;

/// Maps a continuous zoom level to the hexagon resolution tier shown at it.
///
/// Higher zoom gets finer cells so the number of cells on screen stays
/// bounded. Total over every zoom; below [`MEDIUM_ZOOM`] (including NaN)
/// the coarsest tier is used.
pub fn resolution_for_zoom(zoom: f64) -> Resolution {
    if zoom >= FINE_ZOOM {
        Resolution::Ten
    } else if zoom >= MEDIUM_ZOOM {
        Resolution::Nine
    } else {
        Resolution::Eight
    }
}
