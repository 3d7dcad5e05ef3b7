pub mod config;
pub mod model;
pub mod source;

pub use config::*;
pub use model::*;
pub use source::*;
