use crate::geo::LatLngBounds;

/// The geographic bounding box and zoom level currently visible on the map.
///
/// Produced by the map surface on user interaction; read-only everywhere else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub bounds: LatLngBounds,
    /// Web-Mercator style zoom level (0 = whole world).
    pub zoom: u8,
}

impl Viewport {
    pub fn new(bounds: LatLngBounds, zoom: u8) -> Self {
        Self { bounds, zoom }
    }
}
