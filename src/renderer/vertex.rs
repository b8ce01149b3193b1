//! Colored vertex shared by the scene builder and the GPU pipeline
//!
//! The scene is built in screen pixels (origin top-left, y down). `to_ndc`
//! maps a vertex into clip space just before upload.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    pub fn point(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    /// Same vertex with its pixel position mapped into normalized device
    /// coordinates (origin center, y up) for a `size` pixel target
    pub fn to_ndc(&self, size: (u32, u32)) -> Self {
        let extent = Vec2::new(size.0.max(1) as f32, size.1.max(1) as f32);
        let unit = self.point() / extent;
        Self::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}
