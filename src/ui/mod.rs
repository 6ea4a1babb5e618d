pub mod hit_map;
pub mod renderer;
pub mod utils;
pub mod widgets;

pub use hit_map::{HitMap, HitTarget};
pub use renderer::render;
