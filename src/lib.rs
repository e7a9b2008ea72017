#![warn(clippy::all, clippy::cargo)]

mod engine;
mod point;
mod renderer;
mod topology;
mod utils;

pub mod patterns;

pub use engine::{CellSet, LifeEngine};
pub use point::Point;
pub use renderer::TextRenderer;
pub use topology::Topology;
pub use utils::parse_rle;
