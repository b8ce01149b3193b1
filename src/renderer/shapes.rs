//! Shape generation for 2D primitives
//!
//! Shapes are given in world space and emitted in screen pixels, transformed
//! corner by corner through the camera.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Camera2D, Rect};

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, camera: &Camera2D, color: [f32; 4]) -> [Vertex; 6] {
    let corners = [
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.right(), rect.y),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.x, rect.bottom()),
    ]
    .map(|c| camera.world_to_screen(c));

    let v = |p: Vec2| Vertex::at(p, color);
    [
        v(corners[0]),
        v(corners[1]),
        v(corners[2]),
        v(corners[0]),
        v(corners[2]),
        v(corners[3]),
    ]
}

/// Generate vertices for a filled circle. The radius is in world units.
pub fn circle(
    center: Vec2,
    radius: f32,
    camera: &Camera2D,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let c = camera.world_to_screen(center);
    let r = radius * camera.zoom;

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(c, color));
        vertices.push(Vertex::at(c + r * Vec2::from_angle(theta1), color));
        vertices.push(Vertex::at(c + r * Vec2::from_angle(theta2), color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_through_identity_camera() {
        let cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), &cam, [1.0; 4]);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[2].position, [40.0, 60.0]);
        assert_eq!(verts[5].position, [10.0, 60.0]);
    }

    #[test]
    fn test_rect_follows_zoom() {
        let mut cam = Camera2D::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 100.0));
        cam.zoom = 2.0;
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), &cam, [1.0; 4]);
        assert_eq!(verts[0].position, [100.0, 100.0]);
        assert_eq!(verts[2].position, [160.0, 180.0]);
    }

    #[test]
    fn test_circle_vertex_count_and_radius() {
        let cam = Camera2D::new(Vec2::ZERO, Vec2::ZERO);
        let verts = circle(Vec2::new(5.0, 5.0), 3.0, &cam, [1.0; 4], 12);
        assert_eq!(verts.len(), 36);
        let edge = Vec2::from(verts[1].position);
        assert!(((edge - Vec2::new(5.0, 5.0)).length() - 3.0).abs() < 1e-4);
    }
}
