//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::{Bounds, rotate};

/// Two triangles covering the quad `corners` (in winding order)
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners;
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for a filled rectangle centered at `center`, rotated by `rotation`
pub fn rect(center: Vec2, size: Vec2, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| center + rotate(c, rotation));
    quad(corners, color).to_vec()
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn fill_bounds(bounds: &Bounds, color: [f32; 4]) -> Vec<Vertex> {
    rect(bounds.center(), bounds.size(), 0.0, color)
}

/// Generate vertices for an axis-aligned rectangle outline drawn inside `bounds`
pub fn outline_bounds(bounds: &Bounds, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (min, max) = (bounds.min, bounds.max);
    let w = line_width;
    let edges = [
        Bounds::new(min, Vec2::new(max.x, min.y + w)),
        Bounds::new(Vec2::new(min.x, max.y - w), max),
        Bounds::new(Vec2::new(min.x, min.y + w), Vec2::new(min.x + w, max.y - w)),
        Bounds::new(Vec2::new(max.x - w, min.y + w), Vec2::new(max.x, max.y - w)),
    ];
    edges.iter().flat_map(|e| fill_bounds(e, color)).collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a bar magnet: north half on the local +x side, south on -x
pub fn bar_magnet(center: Vec2, size: Vec2, rotation: f32) -> Vec<Vertex> {
    let pole_size = Vec2::new(size.x * 0.5, size.y);
    let offset = rotate(Vec2::new(size.x * 0.25, 0.0), rotation);

    let mut vertices = rect(center + offset, pole_size, rotation, colors::MAGNET_NORTH);
    vertices.extend(rect(center - offset, pole_size, rotation, colors::MAGNET_SOUTH));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertex_count_and_extent() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), 0.0, colors::CONTROL_BUTTON);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 8.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 12.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 19.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 21.0);
    }

    #[test]
    fn test_outline_has_four_edges() {
        let b = Bounds::from_size(100.0, 50.0);
        assert_eq!(outline_bounds(&b, 3.0, colors::PANEL_STROKE).len(), 24);
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, colors::RESET_ALL, 16).len(), 48);
    }

    #[test]
    fn test_flipped_magnet_swaps_poles() {
        let north_x = |verts: &[Vertex]| {
            let north: Vec<f32> = verts
                .iter()
                .filter(|v| v.color == colors::MAGNET_NORTH)
                .map(|v| v.position[0])
                .collect();
            north.iter().sum::<f32>() / north.len() as f32
        };

        let upright = bar_magnet(Vec2::ZERO, Vec2::new(250.0, 50.0), 0.0);
        let flipped = bar_magnet(Vec2::ZERO, Vec2::new(250.0, 50.0), PI);
        assert_eq!(upright.len(), 12);
        assert!(north_x(&upright) > 0.0);
        assert!(north_x(&flipped) < 0.0);
    }
}
