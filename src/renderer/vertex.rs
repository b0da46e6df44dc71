//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (procedural stand-ins for sprite textures)
pub mod colors {
    /// Deep blue at the top of the water gradient
    pub const DEEP_WATER: [f32; 4] = [0.0, 0.0, 0.545, 1.0];
    /// Sky blue at the bottom
    pub const LIGHT_WATER: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const WAVE_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const SURFER_BODY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Brown surfboard
    pub const SURFBOARD: [f32; 4] = [0.545, 0.27, 0.075, 1.0];
    pub const ROCK: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const SHARK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Gold seashell
    pub const SHELL: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    pub const RIPPLE: [f32; 4] = [0.0, 0.0, 0.545, 0.5];
}
