//! Wire model for the points service.
//!
//! Field names match the service's JSON exactly:
//! `id, image_url, location{lat,lng}, weight, category, timestamp`.

use foundation::LatLng;
use serde::{Deserialize, Serialize};

/// Ordinal density tier, 1 (lowest) through 4 (highest).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Low,
        Category::Medium,
        Category::High,
        Category::VeryHigh,
    ];

    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Category {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Category::Low),
            2 => Ok(Category::Medium),
            3 => Ok(Category::High),
            4 => Ok(Category::VeryHigh),
            other => Err(format!("category out of range 1..=4: {other}")),
        }
    }
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        value.tier()
    }
}

/// Position as serialized by the service.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn to_lat_lng(self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// One reported waste-density observation.
///
/// Immutable once received; the current result set is replaced wholesale on
/// each successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub id: i64,
    pub image_url: String,
    pub location: Location,
    /// Density contribution for the heatmap, >= 0.
    pub weight: f64,
    pub category: Category,
    /// ISO-8601 timestamp, kept as text; nothing here needs date arithmetic.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::{Category, GeoPoint};
    use pretty_assertions::assert_eq;

    #[test]
    fn category_accepts_tiers_one_through_four() {
        for (n, expected) in [
            (1u8, Category::Low),
            (2, Category::Medium),
            (3, Category::High),
            (4, Category::VeryHigh),
        ] {
            assert_eq!(Category::try_from(n).unwrap(), expected);
            assert_eq!(expected.tier(), n);
        }
    }

    #[test]
    fn category_rejects_out_of_range_tiers() {
        assert!(Category::try_from(0).is_err());
        assert!(Category::try_from(5).is_err());
    }

    #[test]
    fn geo_point_uses_service_field_names() {
        let json = r#"{
            "id": 42,
            "image_url": "https://cdn.example.com/p/42.jpg",
            "location": { "lat": 12.97, "lng": 77.59 },
            "weight": 2.5,
            "category": 3,
            "timestamp": "2025-11-03T09:12:00Z"
        }"#;
        let p: GeoPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 42);
        assert_eq!(p.category, Category::High);
        assert_eq!(p.location.lat, 12.97);

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["image_url"], "https://cdn.example.com/p/42.jpg");
        assert_eq!(back["category"], 3);
        assert_eq!(back["location"]["lng"], 77.59);
    }

    #[test]
    fn location_converts_to_a_valid_lat_lng() {
        let loc = super::Location {
            lat: 12.97,
            lng: 77.59,
        };
        let ll = loc.to_lat_lng();
        assert!(ll.is_valid());
        assert_eq!((ll.lat, ll.lng), (12.97, 77.59));

        let out_of_range = super::Location {
            lat: 91.0,
            lng: 0.0,
        };
        assert!(!out_of_range.to_lat_lng().is_valid());
    }

    #[test]
    fn geo_point_rejects_bad_category() {
        let json = r#"{
            "id": 1,
            "image_url": "x",
            "location": { "lat": 0.0, "lng": 0.0 },
            "weight": 1.0,
            "category": 9,
            "timestamp": "2025-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<GeoPoint>(json).is_err());
    }
}
