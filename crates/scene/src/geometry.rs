//! Flat-colored triangle geometry for background quads and border frames

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex data for flat-colored geometry
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Vertex position in node-local space
    pub position: [f32; 3],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

/// Indexed triangle list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    pub vertices: Vec<ColorVertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned quad from `min` to `max` at depth `z`
    ///
    /// Vertex order: bottom-left, bottom-right, top-right, top-left.
    pub fn quad(min: Vec2, max: Vec2, z: f32, color: [f32; 4]) -> Self {
        let mut geometry = Self::default();
        geometry.push_quad(min, max, z, color);
        geometry
    }

    /// Rectangular frame of `thickness` surrounding the box `min..max`
    ///
    /// The frame lies outside the box, so the inner edge follows the box
    /// edges exactly. Built from four non-overlapping quads: top and bottom
    /// span the full outer width, left and right fill the gap between them.
    pub fn frame(min: Vec2, max: Vec2, thickness: f32, z: f32, color: [f32; 4]) -> Self {
        let t = thickness;
        let mut geometry = Self::default();
        // Bottom
        geometry.push_quad(Vec2::new(min.x - t, min.y - t), Vec2::new(max.x + t, min.y), z, color);
        // Top
        geometry.push_quad(Vec2::new(min.x - t, max.y), Vec2::new(max.x + t, max.y + t), z, color);
        // Left
        geometry.push_quad(Vec2::new(min.x - t, min.y), Vec2::new(min.x, max.y), z, color);
        // Right
        geometry.push_quad(Vec2::new(max.x, min.y), Vec2::new(max.x + t, max.y), z, color);
        geometry
    }

    fn push_quad(&mut self, min: Vec2, max: Vec2, z: f32, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        for (x, y) in [(min.x, min.y), (max.x, min.y), (max.x, max.y), (min.x, max.y)] {
            self.vertices.push(ColorVertex {
                position: [x, y, z],
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Overwrite the color of every vertex
    pub fn set_color(&mut self, color: [f32; 4]) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Axis-aligned bounds of all vertices, `None` when empty
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Vertex data as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Sum of triangle areas projected onto the XY plane
    pub fn area(&self) -> f32 {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let a = Vec3::from(self.vertices[tri[0] as usize].position).truncate();
                let b = Vec3::from(self.vertices[tri[1] as usize].position).truncate();
                let c = Vec3::from(self.vertices[tri[2] as usize].position).truncate();
                ((b - a).perp_dot(c - a) * 0.5).abs()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertices() {
        let quad = Geometry::quad(Vec2::new(0.0, -1.0), Vec2::new(2.0, 0.0), 0.0, [1.0; 4]);

        assert_eq!(quad.vertices.len(), 4);
        assert_eq!(quad.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(quad.vertices[0].position, [0.0, -1.0, 0.0]); // Bottom-left
        assert_eq!(quad.vertices[2].position, [2.0, 0.0, 0.0]); // Top-right
        assert!((quad.area() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_surrounds_box() {
        let frame = Geometry::frame(Vec2::ZERO, Vec2::new(4.0, 2.0), 1.0, 0.0, [1.0; 4]);

        assert_eq!(frame.vertices.len(), 16);
        assert_eq!(frame.triangle_count(), 8);

        let (lo, hi) = frame.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(hi, Vec3::new(5.0, 3.0, 0.0));

        // Outer 6x4 minus inner 4x2
        assert!((frame.area() - 16.0).abs() < 1e-5);
    }

    #[test]
    fn test_set_color() {
        let mut quad = Geometry::quad(Vec2::ZERO, Vec2::ONE, 0.0, [1.0; 4]);
        quad.set_color([0.0, 0.5, 0.0, 1.0]);
        assert!(quad.vertices.iter().all(|v| v.color == [0.0, 0.5, 0.0, 1.0]));
    }

    #[test]
    fn test_vertex_bytes_len() {
        let quad = Geometry::quad(Vec2::ZERO, Vec2::ONE, 0.0, [1.0; 4]);
        assert_eq!(quad.vertex_bytes().len(), 4 * std::mem::size_of::<ColorVertex>());
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Geometry::default().bounds().is_none());
        assert!(Geometry::default().is_empty());
    }
}
