/// A WGS84 position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Geographic bounding box in degrees, south/west and north/east corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Bounds of the square spanning `half_span_deg` degrees either side of `center`.
    pub fn around(center: LatLng, half_span_deg: f64) -> Self {
        Self {
            south: center.lat - half_span_deg,
            west: center.lng - half_span_deg,
            north: center.lat + half_span_deg,
            east: center.lng + half_span_deg,
        }
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Corners in range and strictly ordered (south < north, west < east).
    ///
    /// Antimeridian-crossing boxes are not representable; the points service
    /// rejects them the same way.
    pub fn is_valid(&self) -> bool {
        self.south_west().is_valid()
            && self.north_east().is_valid()
            && self.south < self.north
            && self.west < self.east
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }
}
