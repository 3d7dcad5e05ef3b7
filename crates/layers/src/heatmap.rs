use points::{GeoPoint, Location};

use crate::{Layer, LayerId};

/// One weighted input to the aggregate density visualization.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatmapSample {
    pub position: Location,
    pub weight: f64,
}

/// Aggregate density layer. Rendered at every zoom level, unlike markers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatmapLayer {
    id: LayerId,
}

impl HeatmapLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn extract(&self, points: &[GeoPoint]) -> Vec<HeatmapSample> {
        points
            .iter()
            .map(|p| HeatmapSample {
                position: p.location,
                weight: p.weight,
            })
            .collect()
    }
}

impl Layer for HeatmapLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
