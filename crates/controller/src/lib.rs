pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::*;
pub use debounce::*;
pub use state::*;
