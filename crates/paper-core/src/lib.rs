pub mod camera;
pub mod config;
pub mod constants;
pub mod flip;
pub mod geometry;
pub mod hotspot;
pub mod stack;
pub mod transform;

pub static PAPER_WGSL: &str = include_str!("../shaders/paper.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use flip::*;
pub use geometry::*;
pub use hotspot::*;
pub use stack::*;
pub use transform::*;
