use points::{GeoPoint, Location};

use crate::symbology::tier_style;
use crate::{Layer, LayerId};

/// One pin overlay, colored by its point's density tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point_id: i64,
    pub position: Location,
    pub image_url: String,
    pub color: [f32; 4],
}

/// Per-point pin overlay, suppressed below `min_zoom` so the number of
/// overlay objects stays bounded when zoomed out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerLayer {
    id: LayerId,
    pub min_zoom: u8,
}

impl MarkerLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            min_zoom: 14,
        }
    }

    pub fn with_min_zoom(mut self, min_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    /// One marker per point at/above `min_zoom`, nothing below it.
    pub fn extract(&self, zoom: u8, points: &[GeoPoint]) -> Vec<Marker> {
        if zoom < self.min_zoom {
            return Vec::new();
        }
        points
            .iter()
            .map(|p| Marker {
                point_id: p.id,
                position: p.location,
                image_url: p.image_url.clone(),
                color: tier_style(p.category).color,
            })
            .collect()
    }
}

impl Layer for MarkerLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerLayer;
    use crate::symbology::tier_style;
    use points::{Category, GeoPoint, Location};

    fn point(id: i64, category: Category) -> GeoPoint {
        GeoPoint {
            id,
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            location: Location { lat: 1.0, lng: 2.0 },
            weight: 1.0,
            category,
            timestamp: String::new(),
        }
    }

    #[test]
    fn markers_are_suppressed_below_the_zoom_threshold() {
        let layer = MarkerLayer::new(1);
        let pts = [point(1, Category::Low), point(2, Category::High)];
        assert!(layer.extract(13, &pts).is_empty());
        assert_eq!(layer.extract(14, &pts).len(), 2);
        assert_eq!(layer.extract(18, &pts).len(), 2);
    }

    #[test]
    fn markers_carry_the_tier_color() {
        let layer = MarkerLayer::new(1);
        let markers = layer.extract(14, &[point(7, Category::VeryHigh)]);
        assert_eq!(markers[0].point_id, 7);
        assert_eq!(markers[0].color, tier_style(Category::VeryHigh).color);
        assert_eq!(markers[0].image_url, "https://cdn.example.com/7.jpg");
    }

    #[test]
    fn custom_threshold_is_respected() {
        let layer = MarkerLayer::new(1).with_min_zoom(10);
        let pts = [point(1, Category::Low)];
        assert!(layer.extract(9, &pts).is_empty());
        assert_eq!(layer.extract(10, &pts).len(), 1);
    }
}
