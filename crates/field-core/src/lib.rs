pub mod constants;
pub mod driver;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod physics;
pub mod render;
pub mod state;

pub use constants::*;
pub use driver::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use particle::*;
pub use render::*;
pub use state::*;
