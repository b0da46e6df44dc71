//! WebGPU rendering module
//!
//! Flat triangle geometry generated per frame from the game state; no
//! textures. Sprites are the same procedural drawing recipes the game
//! has always used, just emitted as vertices instead of canvas pixels.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use vertex::Vertex;
