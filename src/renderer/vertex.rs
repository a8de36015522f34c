//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for screen elements
pub mod colors {
    pub const MAGNET_NORTH: [f32; 4] = [0.86, 0.16, 0.16, 1.0];
    pub const MAGNET_SOUTH: [f32; 4] = [0.16, 0.35, 0.86, 1.0];
    pub const PANEL_FILL: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const PANEL_STROKE: [f32; 4] = [1.0, 0.65, 0.0, 1.0]; // orange
    pub const CONTROL_BUTTON: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // yellow
    pub const RESET_ALL: [f32; 4] = [0.97, 0.58, 0.11, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
