pub mod bot;
pub mod collision;
pub mod movement;
pub mod reflection;
pub mod scoring;

pub use bot::*;
pub use collision::*;
pub use movement::*;
pub use reflection::*;
pub use scoring::*;
