pub mod geo;
pub mod viewport;

// Foundation crate: small, well-tested primitives only.
pub use geo::*;
pub use viewport::*;
