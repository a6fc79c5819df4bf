//! JSON report of a laid-out label

use labelnode_label::{LabelNode, Rectangle};
use labelnode_scene::Geometry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LabelReport {
    pub text: String,
    pub font: String,
    pub face: String,
    pub font_size: f32,
    pub rectangle: Rectangle,
    pub text_width: f32,
    pub text_height: f32,
    pub lines: usize,
    pub glyphs: usize,
    pub background: Option<GeometryReport>,
    pub border: Option<GeometryReport>,
}

#[derive(Debug, Serialize)]
pub struct GeometryReport {
    pub triangles: usize,
    pub color: [f32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<[f32; 3]>>,
}

impl GeometryReport {
    fn new(geometry: &Geometry, with_vertices: bool) -> Self {
        Self {
            triangles: geometry.triangle_count(),
            color: geometry.vertices.first().map(|v| v.color).unwrap_or_default(),
            vertices: with_vertices
                .then(|| geometry.vertices.iter().map(|v| v.position).collect()),
        }
    }
}

impl LabelReport {
    pub fn new(label: &LabelNode, with_vertices: bool) -> Self {
        let extent = label.text_extent();
        Self {
            text: label.text().to_string(),
            font: label.font().to_string(),
            face: label.face_name().to_string(),
            font_size: label.font_size(),
            rectangle: label.rectangle(),
            text_width: extent.width,
            text_height: extent.height,
            lines: extent.lines,
            glyphs: label.text_drawable().map_or(0, |t| t.glyphs.len()),
            background: label
                .background_geometry()
                .map(|g| GeometryReport::new(g, with_vertices)),
            border: label
                .border_geometry()
                .map(|g| GeometryReport::new(g, with_vertices)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelnode_label::{Color, LabelConfig};

    #[test]
    fn test_report_reflects_decorations() {
        let label = LabelNode::new(
            LabelConfig::new("ab")
                .with_background(Color::BLACK)
                .with_border(Color::WHITE, 1.0),
        );
        let report = LabelReport::new(&label, true);

        assert_eq!(report.glyphs, 2);
        assert_eq!(report.background.as_ref().map(|b| b.triangles), Some(2));
        assert_eq!(report.border.as_ref().map(|b| b.triangles), Some(8));
        assert_eq!(
            report.border.as_ref().and_then(|b| b.vertices.as_ref()).map(Vec::len),
            Some(16)
        );
    }

    #[test]
    fn test_report_omits_vertices_by_default() {
        let label = LabelNode::new(LabelConfig::new("ab").with_background(Color::BLACK));
        let json = serde_json::to_value(LabelReport::new(&label, false)).unwrap();
        assert!(json["background"].get("vertices").is_none());
        assert!(json["border"].is_null());
    }
}
