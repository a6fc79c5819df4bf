//! Label node - text with an optional background quad and border frame
//!
//! The node owns a small scene subtree:
//!
//! ```text
//! Transform "label"            translation = anchor position
//! ├── Geode "label.background"
//! ├── Geode "label.border"
//! └── Transform "label.resolution"   scale = 1 / resolution factor
//!     └── Geode "label.text"
//! ```
//!
//! Children draw in order, so the text renders above its decorations.

use crate::config::{LabelConfig, DEFAULT_FONT_RESOLUTION};
use crate::layout;
use crate::types::{finite_or_zero, non_negative, Color, Padding, Rectangle, TextAlign};
use glam::{Vec2, Vec3};
use labelnode_scene::{Drawable, Geode, Geometry, GlyphQuad, Node, TextDrawable, Transform};
use labelnode_text::{resolve_font, FontFace, FontLoader, TextExtent, DEFAULT_RASTER_SIZE};
use std::sync::Arc;
use tracing::debug;

pub const ROOT_NODE: &str = "label";
pub const BACKGROUND_NODE: &str = "label.background";
pub const BORDER_NODE: &str = "label.border";
pub const RESOLUTION_NODE: &str = "label.resolution";
pub const TEXT_NODE: &str = "label.text";

/// A positioned text label with background and border decoration
///
/// Every mutator recomputes whatever geometry it affects before returning,
/// so [`rectangle`](Self::rectangle) and the scene subtree are never stale.
#[derive(Debug, Clone)]
pub struct LabelNode {
    text: String,
    font_size: f32,
    color: Color,
    position: Vec2,
    align: TextAlign,
    padding: Padding,
    background_color: Color,
    border_color: Color,
    border_width: f32,
    font_path: String,
    face: Arc<dyn FontFace>,
    fixed_width: Option<f32>,
    fixed_height: Option<f32>,
    font_resolution: (u32, u32),

    extent: TextExtent,
    size: Vec2,
    box_left: f32,
    text_origin: Vec2,
    rectangle: Rectangle,

    root: Node,
}

impl LabelNode {
    /// Create a label, loading `config.font_path` or falling back to the builtin face
    pub fn new(config: LabelConfig) -> Self {
        let face = resolve_font(&config.font_path);
        Self::with_face(config, face)
    }

    /// Create a label, resolving the font through a shared loader
    pub fn with_loader(config: LabelConfig, loader: &mut FontLoader) -> Self {
        let face = loader.resolve(&config.font_path);
        Self::with_face(config, face)
    }

    /// Create a label that lays out text with `face`
    pub fn with_face(config: LabelConfig, face: Arc<dyn FontFace>) -> Self {
        let root: Node = Transform::new(ROOT_NODE, Vec3::ZERO)
            .with_child(Geode::new(BACKGROUND_NODE))
            .with_child(Geode::new(BORDER_NODE))
            .with_child(Transform::new(RESOLUTION_NODE, Vec3::ZERO).with_child(Geode::new(TEXT_NODE)))
            .into();

        let mut label = Self {
            text: config.text,
            font_size: non_negative(config.font_size),
            color: config.color,
            position: finite_position(config.position),
            align: config.align,
            padding: config.padding.clamped(),
            background_color: config.background_color,
            border_color: config.border_color,
            border_width: non_negative(config.border_width),
            font_path: config.font_path,
            face,
            fixed_width: config.fixed_width.map(non_negative),
            fixed_height: config.fixed_height.map(non_negative),
            font_resolution: clamp_resolution(config.font_resolution),
            extent: TextExtent::default(),
            size: Vec2::ZERO,
            box_left: 0.0,
            text_origin: Vec2::ZERO,
            rectangle: Rectangle::default(),
            root,
        };
        label.update_resolution_correction();
        label.update_raster_size();
        label.relayout();
        debug!(
            "Created label {:?} with font '{}' ({}x{})",
            label.text,
            label.face.name(),
            label.size.x,
            label.size.y
        );
        label
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LabelConfig {
        LabelConfig {
            text: self.text.clone(),
            font_size: self.font_size,
            color: self.color,
            position: (self.position.x, self.position.y),
            align: self.align,
            padding: self.padding,
            background_color: self.background_color,
            border_color: self.border_color,
            border_width: self.border_width,
            font_path: self.font_path.clone(),
            fixed_width: self.fixed_width,
            fixed_height: self.fixed_height,
            font_resolution: self.font_resolution,
        }
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    /// Negative sizes clamp to zero
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = non_negative(font_size);
        self.relayout();
    }

    /// Negative padding clamps to zero
    pub fn set_padding(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.padding = Padding::new(left, top, right, bottom).clamped();
        self.relayout();
    }

    /// Override the box width, or measure it from the text on `None`
    pub fn set_fixed_width(&mut self, width: Option<f32>) {
        self.fixed_width = width.map(non_negative);
        self.relayout();
    }

    /// Override the box height, or measure it from the text on `None`
    pub fn set_fixed_height(&mut self, height: Option<f32>) {
        self.fixed_height = height.map(non_negative);
        self.relayout();
    }

    /// Non-finite coordinates are treated as zero
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = finite_position((x, y));
        self.relayout();
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
        self.relayout();
    }

    /// Change the text color without re-measuring
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        if let Some(text) = self.text_geode_mut().and_then(Geode::text_mut) {
            text.color = color.to_array();
        }
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
        if !self.recolor(BACKGROUND_NODE, color) {
            self.update_background();
        }
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        if !self.recolor(BORDER_NODE, color) {
            self.update_border();
        }
    }

    /// Negative widths clamp to zero
    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = non_negative(width);
        self.update_border();
    }

    /// Rasterize glyphs for the given resolution
    ///
    /// Atlas faces are rebuilt with glyphs rasterized at the larger
    /// resolution component, in pixels. Glyph geometry is emitted scaled by
    /// `resolution / 32` and the resolution transform scales it back, so the
    /// label keeps its on-screen size. Zero components clamp to one.
    pub fn set_font_resolution(&mut self, x: u32, y: u32) {
        self.font_resolution = clamp_resolution((x, y));
        self.update_resolution_correction();
        self.update_raster_size();
        self.relayout();
    }

    /// Switch to the font at `path`, falling back to the builtin face
    pub fn set_font(&mut self, path: impl Into<String>) {
        self.font_path = path.into();
        self.face = resolve_font(&self.font_path);
        self.update_raster_size();
        self.relayout();
    }

    /// Switch fonts, resolving through a shared loader
    pub fn set_font_with(&mut self, path: impl Into<String>, loader: &mut FontLoader) {
        self.font_path = path.into();
        self.face = loader.resolve(&self.font_path);
        self.update_raster_size();
        self.relayout();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Padding as (left, top, right, bottom)
    pub fn padding(&self) -> (f32, f32, f32, f32) {
        let p = self.padding;
        (p.left, p.top, p.right, p.bottom)
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// The configured font path (empty for the builtin face)
    pub fn font(&self) -> &str {
        &self.font_path
    }

    /// Name of the face actually used for layout
    pub fn face_name(&self) -> &str {
        self.face.name()
    }

    /// The face used for layout
    pub fn face(&self) -> &dyn FontFace {
        self.face.as_ref()
    }

    pub fn position(&self) -> (f32, f32) {
        (self.position.x, self.position.y)
    }

    pub fn fixed_width(&self) -> Option<f32> {
        self.fixed_width
    }

    pub fn fixed_height(&self) -> Option<f32> {
        self.fixed_height
    }

    pub fn font_resolution(&self) -> (u32, u32) {
        self.font_resolution
    }

    /// Measured extent of the text without padding
    pub fn text_extent(&self) -> TextExtent {
        self.extent
    }

    /// The padded box in the parent's 2D space
    pub fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    /// Root of the label's scene subtree, for attaching to a host graph
    pub fn scene_node(&self) -> &Node {
        &self.root
    }

    /// Hand the scene subtree over to the host graph
    pub fn into_scene_node(self) -> Node {
        self.root
    }

    /// Background quad, `None` when nothing is drawn
    pub fn background_geometry(&self) -> Option<&Geometry> {
        self.geode(BACKGROUND_NODE).and_then(Geode::geometry)
    }

    /// Border frame, `None` when nothing is drawn
    pub fn border_geometry(&self) -> Option<&Geometry> {
        self.geode(BORDER_NODE).and_then(Geode::geometry)
    }

    pub fn text_drawable(&self) -> Option<&TextDrawable> {
        self.geode(TEXT_NODE).and_then(Geode::text)
    }

    // ------------------------------------------------------------------
    // Recomputation cascade
    // ------------------------------------------------------------------

    fn relayout(&mut self) {
        self.update_size();
        self.update_bounding_box();
        self.update_position();
        self.update_text();
        self.update_background();
        self.update_border();
        debug!("Label {:?} laid out at {:?}", self.text, self.rectangle);
    }

    fn update_size(&mut self) {
        self.extent = self.face.measure(&self.text, self.font_size);
        self.size = layout::box_size(self.extent, self.padding, self.fixed_width, self.fixed_height);
    }

    fn update_bounding_box(&mut self) {
        self.box_left = layout::box_offset(self.align, self.size.x);
        let left = self.position.x + self.box_left;
        self.rectangle = Rectangle {
            left,
            right: left + self.size.x,
            top: self.position.y,
            bottom: self.position.y - self.size.y,
        };
    }

    fn update_position(&mut self) {
        self.text_origin = layout::text_origin(
            self.align,
            self.box_left,
            self.size.x,
            self.padding,
            self.extent.width,
        );
        let translation = self.position.extend(0.0);
        if let Some(root) = self.root.as_transform_mut() {
            root.translation = translation;
        }
    }

    fn update_text(&mut self) {
        let factor = self.resolution_factor();
        let glyphs = self
            .face
            .layout(&self.text, self.font_size)
            .into_iter()
            .map(|g| {
                let min = Vec2::new(g.position_x, g.position_y);
                GlyphQuad {
                    min: min * factor,
                    max: (min + Vec2::new(g.width, g.height)) * factor,
                    uv_min: g.uv_min,
                    uv_max: g.uv_max,
                }
            })
            .collect();

        let drawable = TextDrawable {
            text: self.text.clone(),
            font: self.face.name().to_string(),
            character_size: self.font_size * factor.y,
            color: self.color.to_array(),
            origin: (self.text_origin * factor).extend(0.0),
            glyphs,
        };
        if let Some(geode) = self.text_geode_mut() {
            geode.replace(Some(Drawable::Text(drawable)));
        }
    }

    fn update_background(&mut self) {
        let visible =
            !self.background_color.is_transparent() && self.size.x > 0.0 && self.size.y > 0.0;
        let geometry = visible.then(|| {
            let (min, max) = self.local_box();
            Geometry::quad(min, max, 0.0, self.background_color.to_array())
        });
        if let Some(geode) = self.geode_mut(BACKGROUND_NODE) {
            geode.replace(geometry.map(Drawable::Geometry));
        }
    }

    fn update_border(&mut self) {
        let visible = !self.border_color.is_transparent() && self.border_width > 0.0;
        let geometry = visible.then(|| {
            let (min, max) = self.local_box();
            Geometry::frame(min, max, self.border_width, 0.0, self.border_color.to_array())
        });
        if let Some(geode) = self.geode_mut(BORDER_NODE) {
            geode.replace(geometry.map(Drawable::Geometry));
        }
    }

    fn update_resolution_correction(&mut self) {
        let factor = self.resolution_factor();
        if let Some(transform) = self
            .root
            .find_mut(RESOLUTION_NODE)
            .and_then(Node::as_transform_mut)
        {
            transform.scale = Vec3::new(1.0 / factor.x, 1.0 / factor.y, 1.0);
        }
    }

    /// Swap in a face rasterized for the current font resolution
    fn update_raster_size(&mut self) {
        let size = DEFAULT_RASTER_SIZE * self.resolution_factor().max_element();
        let Some(current) = self.face.raster_size() else {
            return;
        };
        if current == size {
            return;
        }
        if let Some(face) = self.face.rasterized_at(size) {
            debug!("Re-rasterized '{}' at {} px (was {})", face.name(), size, current);
            self.face = face;
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Recolor an existing decoration in place, `false` if it must be rebuilt
    fn recolor(&mut self, name: &str, color: Color) -> bool {
        if color.is_transparent() {
            return false;
        }
        match self.geode_mut(name).and_then(Geode::geometry_mut) {
            Some(geometry) => {
                geometry.set_color(color.to_array());
                true
            }
            None => false,
        }
    }

    /// Box corners in label-local space
    fn local_box(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.box_left, -self.size.y),
            Vec2::new(self.box_left + self.size.x, 0.0),
        )
    }

    fn resolution_factor(&self) -> Vec2 {
        let (x, y) = self.font_resolution;
        Vec2::new(x as f32, y as f32) / DEFAULT_FONT_RESOLUTION as f32
    }

    fn geode(&self, name: &str) -> Option<&Geode> {
        self.root.find(name).and_then(Node::as_geode)
    }

    fn geode_mut(&mut self, name: &str) -> Option<&mut Geode> {
        self.root.find_mut(name).and_then(Node::as_geode_mut)
    }

    fn text_geode_mut(&mut self) -> Option<&mut Geode> {
        self.geode_mut(TEXT_NODE)
    }
}

impl Default for LabelNode {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}

fn clamp_resolution((x, y): (u32, u32)) -> (u32, u32) {
    (x.max(1), y.max(1))
}

fn finite_position((x, y): (f32, f32)) -> Vec2 {
    Vec2::new(finite_or_zero(x), finite_or_zero(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use labelnode_text::BuiltinFace;

    fn label(config: LabelConfig) -> LabelNode {
        LabelNode::with_face(config, Arc::new(BuiltinFace))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_hi_end_to_end() {
        let node = label(
            LabelConfig::new("Hi")
                .with_font_size(12.0)
                .with_padding(Padding::uniform(2.0)),
        );
        let rect = node.rectangle();
        let text_width = BuiltinFace.measure("Hi", 12.0).width;

        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
        assert!(approx(rect.right, text_width + 4.0));
        assert!(approx(rect.bottom, -(12.0 + 4.0)));
    }

    #[test]
    fn test_alignment_anchors() {
        let config = LabelConfig::new("abcd").with_position(10.0, 5.0);
        let width = label(config.clone()).rectangle().width();

        let left = label(config.clone().with_align(TextAlign::Left)).rectangle();
        assert!(approx(left.left, 10.0));

        let center = label(config.clone().with_align(TextAlign::Center)).rectangle();
        assert!(approx(center.left, 10.0 - width / 2.0));
        assert!(approx(center.right, 10.0 + width / 2.0));

        let right = label(config.with_align(TextAlign::Right)).rectangle();
        assert!(approx(right.right, 10.0));
    }

    #[test]
    fn test_set_text_updates_box() {
        let mut node = label(LabelConfig::new("a").with_padding(Padding::uniform(1.0)));
        let before = node.rectangle().width();

        node.set_text("abc");
        assert_eq!(node.text(), "abc");
        assert!(node.rectangle().width() > before);
        assert_eq!(node.text_drawable().map(|t| t.text.as_str()), Some("abc"));
    }

    #[test]
    fn test_empty_text_is_padding_only() {
        let node = label(LabelConfig::new("").with_padding(Padding::new(1.0, 2.0, 3.0, 4.0)));
        let rect = node.rectangle();
        assert!(approx(rect.width(), 4.0));
        assert!(approx(rect.height(), 6.0));
        assert!(node.text_drawable().unwrap().glyphs.is_empty());
    }

    #[test]
    fn test_negative_inputs_clamp() {
        let mut node = label(LabelConfig::new("x"));
        node.set_padding(-1.0, -2.0, 3.0, -4.0);
        assert_eq!(node.padding(), (0.0, 0.0, 3.0, 0.0));

        node.set_border_width(-5.0);
        assert_eq!(node.border_width(), 0.0);

        node.set_font_size(-12.0);
        assert_eq!(node.font_size(), 0.0);
        assert!(approx(node.rectangle().width(), 3.0));

        node.set_fixed_width(Some(-3.0));
        assert_eq!(node.fixed_width(), Some(0.0));
    }

    #[test]
    fn test_fixed_size_override_and_reset() {
        let mut node = label(LabelConfig::new("abc"));
        let measured = node.rectangle();

        node.set_fixed_width(Some(100.0));
        node.set_fixed_height(Some(30.0));
        assert!(approx(node.rectangle().width(), 100.0));
        assert!(approx(node.rectangle().height(), 30.0));

        node.set_fixed_width(None);
        node.set_fixed_height(None);
        assert_eq!(node.rectangle(), measured);
    }

    #[test]
    fn test_background_suppressed_when_transparent() {
        let mut node = label(LabelConfig::new("abc"));
        assert!(node.background_geometry().is_none());

        node.set_background_color(Color::new(0.0, 0.0, 0.0, 0.5));
        let quad = node.background_geometry().unwrap();
        assert_eq!(quad.vertices.len(), 4);
        assert!(approx(quad.area(), node.rectangle().width() * node.rectangle().height()));

        node.set_background_color(Color::new(1.0, 0.0, 0.0, 0.0));
        assert!(node.background_geometry().is_none());
    }

    #[test]
    fn test_border_needs_width_and_alpha() {
        let mut node = label(LabelConfig::new("abc"));
        node.set_border_color(Color::WHITE);
        assert!(node.border_geometry().is_none());

        node.set_border_width(2.0);
        let frame = node.border_geometry().unwrap();
        let (lo, hi) = frame.bounds().unwrap();
        let size = node.rectangle();
        assert!(approx(hi.x - lo.x, size.width() + 4.0));
        assert!(approx(hi.y - lo.y, size.height() + 4.0));

        node.set_border_color(Color::TRANSPARENT);
        assert!(node.border_geometry().is_none());
    }

    #[test]
    fn test_decoration_setters_keep_layout() {
        let mut node = label(LabelConfig::new("abc").with_padding(Padding::uniform(3.0)));
        let rect = node.rectangle();
        let text = node.text_drawable().cloned();

        node.set_background_color(Color::BLACK);
        node.set_border_color(Color::WHITE);
        node.set_border_width(1.0);
        node.set_color(Color::new(0.0, 1.0, 0.0, 1.0));

        assert_eq!(node.rectangle(), rect);
        let after = node.text_drawable().unwrap();
        assert_eq!(after.glyphs, text.unwrap().glyphs);
        assert_eq!(after.color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_position_moves_transform_only() {
        let mut node = label(LabelConfig::new("abc").with_background(Color::BLACK));
        let quad = node.background_geometry().cloned();

        node.set_position(5.0, -7.0);
        assert_eq!(node.position(), (5.0, -7.0));
        assert_eq!(node.rectangle().left, 5.0);
        assert_eq!(node.rectangle().top, -7.0);
        assert_eq!(node.background_geometry().cloned(), quad);

        let root = node.scene_node().as_transform().unwrap();
        assert_eq!(root.translation, Vec3::new(5.0, -7.0, 0.0));
    }

    #[test]
    fn test_non_finite_position_is_zero() {
        let mut node = label(LabelConfig::new("abc").with_background(Color::BLACK));
        node.set_position(f32::NAN, f32::INFINITY);

        assert_eq!(node.position(), (0.0, 0.0));
        let rect = node.rectangle();
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.top, 0.0);
        assert!(rect.right.is_finite() && rect.bottom.is_finite());
        let root = node.scene_node().as_transform().unwrap();
        assert_eq!(root.translation, Vec3::ZERO);

        let node = label(LabelConfig::new("abc").with_position(3.0, f32::NEG_INFINITY));
        assert_eq!(node.position(), (3.0, 0.0));
    }

    #[test]
    fn test_recolor_keeps_geometry() {
        let mut node = label(
            LabelConfig::new("abc")
                .with_background(Color::BLACK)
                .with_border(Color::WHITE, 1.0),
        );
        let quad = node.background_geometry().cloned().unwrap();
        let frame = node.border_geometry().cloned().unwrap();

        node.set_background_color(Color::new(0.2, 0.2, 0.2, 1.0));
        node.set_border_color(Color::new(1.0, 0.0, 0.0, 1.0));

        let recolored = node.background_geometry().unwrap();
        assert_eq!(recolored.indices, quad.indices);
        assert!(recolored.vertices.iter().zip(&quad.vertices).all(|(a, b)| a.position == b.position));
        assert!(recolored.vertices.iter().all(|v| v.color == [0.2, 0.2, 0.2, 1.0]));
        let border = node.border_geometry().unwrap();
        assert_eq!(border.vertices.len(), frame.vertices.len());
        assert!(border.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_builtin_face_ignores_raster_size() {
        let mut node = label(LabelConfig::new("abc"));
        node.set_font_resolution(128, 128);
        assert_eq!(node.face_name(), BuiltinFace::NAME);
        assert!(node.face().raster_size().is_none());
    }

    #[test]
    fn test_font_resolution_keeps_screen_size() {
        let mut node = label(LabelConfig::new("abc"));

        let world_glyph = |node: &LabelNode| {
            let mut corner = None;
            node.scene_node().traverse(Mat4::IDENTITY, &mut |n, world| {
                if let Some(text) = n.as_geode().and_then(Geode::text) {
                    let g = text.glyphs[0];
                    corner = Some(world.transform_point3(text.origin + g.max.extend(0.0)));
                }
            });
            corner.unwrap()
        };

        let before = world_glyph(&node);
        node.set_font_resolution(128, 64);
        assert_eq!(node.font_resolution(), (128, 64));
        let after = world_glyph(&node);

        assert!((before - after).length() < 1e-3);
        assert!(approx(node.text_drawable().unwrap().character_size, 24.0));

        node.set_font_resolution(0, 0);
        assert_eq!(node.font_resolution(), (1, 1));
    }

    #[test]
    fn test_scene_structure() {
        let node = label(LabelConfig::new("abc").with_border(Color::WHITE, 1.0));
        let root = node.scene_node();

        assert_eq!(root.name(), ROOT_NODE);
        assert_eq!(root.children().len(), 3);
        assert_eq!(root.children()[0].name(), BACKGROUND_NODE);
        assert_eq!(root.children()[1].name(), BORDER_NODE);
        assert!(root.find(TEXT_NODE).is_some());
        // Border + text
        assert_eq!(root.drawable_count(), 2);
    }

    #[test]
    fn test_missing_font_falls_back() {
        let node = LabelNode::new(LabelConfig::new("abc").with_font_path("/missing/font.ttf"));
        assert_eq!(node.font(), "/missing/font.ttf");
        assert_eq!(node.face_name(), BuiltinFace::NAME);
        assert!(node.rectangle().width() > 0.0);
    }

    #[test]
    fn test_config_snapshot_roundtrip() {
        let config = LabelConfig::new("abc")
            .with_align(TextAlign::Center)
            .with_padding(Padding::uniform(2.0))
            .with_border(Color::WHITE, 1.5);
        assert_eq!(label(config.clone()).config(), config);
    }
}
