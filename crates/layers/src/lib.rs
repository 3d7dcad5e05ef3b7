pub mod detail;
pub mod heatmap;
pub mod markers;
pub mod symbology;

pub use detail::*;
pub use heatmap::*;
pub use markers::*;
pub use symbology::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

pub trait Layer {
    fn id(&self) -> LayerId;
}
