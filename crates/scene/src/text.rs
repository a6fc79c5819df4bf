//! Text drawable - laid-out glyph quads ready for rendering

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex format for text rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GlyphVertex {
    /// Position in node-local space
    pub position: [f32; 3],
    /// UV coordinates in font atlas
    pub uv: [f32; 2],
    /// Text color (RGBA)
    pub color: [f32; 4],
}

/// A single positioned glyph, relative to the drawable origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub min: Vec2,
    pub max: Vec2,
    pub uv_min: (f32, f32),
    pub uv_max: (f32, f32),
}

/// Text placed in a geode
///
/// `origin` is the top-left corner of the text block. Glyph quads extend
/// right and down (negative y) from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDrawable {
    /// Text content
    pub text: String,
    /// Name of the font face the glyphs were laid out with
    pub font: String,
    /// Character size the glyphs were laid out at
    pub character_size: f32,
    /// Text color (RGBA)
    pub color: [f32; 4],
    /// Top-left of the text block in node-local space
    pub origin: Vec3,
    /// Glyph quads relative to `origin`
    pub glyphs: Vec<GlyphQuad>,
}

impl TextDrawable {
    /// Generate mesh data for the glyphs
    pub fn mesh(&self) -> (Vec<GlyphVertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.glyphs.len() * 4);
        let mut indices = Vec::with_capacity(self.glyphs.len() * 6);
        let o = self.origin;

        for glyph in &self.glyphs {
            let base_vertex = vertices.len() as u32;
            let (x0, y0) = (o.x + glyph.min.x, o.y + glyph.min.y);
            let (x1, y1) = (o.x + glyph.max.x, o.y + glyph.max.y);
            let (u0, v0) = glyph.uv_min;
            let (u1, v1) = glyph.uv_max;

            // Atlas rows grow downwards, so the glyph top samples v0
            for (position, uv) in [
                ([x0, y0, o.z], [u0, v1]),
                ([x1, y0, o.z], [u1, v1]),
                ([x1, y1, o.z], [u1, v0]),
                ([x0, y1, o.z], [u0, v0]),
            ] {
                vertices.push(GlyphVertex {
                    position,
                    uv,
                    color: self.color,
                });
            }

            indices.extend_from_slice(&[
                base_vertex,
                base_vertex + 1,
                base_vertex + 2,
                base_vertex,
                base_vertex + 2,
                base_vertex + 3,
            ]);
        }

        (vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_offsets_by_origin() {
        let text = TextDrawable {
            text: "A".into(),
            font: "test".into(),
            character_size: 10.0,
            color: [1.0; 4],
            origin: Vec3::new(5.0, -2.0, 0.0),
            glyphs: vec![GlyphQuad {
                min: Vec2::new(0.0, -10.0),
                max: Vec2::new(6.0, 0.0),
                uv_min: (0.0, 0.0),
                uv_max: (0.5, 0.5),
            }],
        };

        let (vertices, indices) = text.mesh();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(vertices[0].position, [5.0, -12.0, 0.0]);
        assert_eq!(vertices[2].position, [11.0, -2.0, 0.0]);
        assert_eq!(vertices[3].uv, [0.0, 0.0]);
    }
}
