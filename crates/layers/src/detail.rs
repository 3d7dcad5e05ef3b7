use points::{GeoPoint, Location};

use crate::symbology::tier_style;

/// Everything a detail view needs to render one selected point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDetail {
    pub image_url: String,
    pub category_label: &'static str,
    pub category_color: [f32; 4],
    pub timestamp: String,
    pub weight: f64,
    pub directions_url: String,
}

impl PointDetail {
    pub fn from_point(point: &GeoPoint) -> Self {
        let style = tier_style(point.category);
        Self {
            image_url: point.image_url.clone(),
            category_label: style.label,
            category_color: style.color,
            timestamp: point.timestamp.clone(),
            weight: point.weight,
            directions_url: directions_url(point.location),
        }
    }
}

/// Turn-by-turn directions deep link for a point's coordinates.
pub fn directions_url(location: Location) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        location.lat, location.lng
    )
}

#[cfg(test)]
mod tests {
    use super::{PointDetail, directions_url};
    use points::{Category, GeoPoint, Location};

    #[test]
    fn directions_deep_link_format() {
        let url = directions_url(Location {
            lat: 12.9716,
            lng: 77.5946,
        });
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=12.9716,77.5946"
        );
    }

    #[test]
    fn detail_carries_tier_label_and_weight() {
        let p = GeoPoint {
            id: 5,
            image_url: "https://cdn.example.com/5.jpg".to_string(),
            location: Location { lat: 1.5, lng: 2.5 },
            weight: 3.25,
            category: Category::High,
            timestamp: "2025-11-03T09:12:00Z".to_string(),
        };
        let detail = PointDetail::from_point(&p);
        assert_eq!(detail.category_label, "High");
        assert_eq!(detail.weight, 3.25);
        assert_eq!(detail.timestamp, "2025-11-03T09:12:00Z");
        assert!(detail.directions_url.ends_with("destination=1.5,2.5"));
    }
}
