//! Font faces - the measuring and layout boundary used by labels

use std::fmt;
use std::sync::Arc;

/// Vertical metrics of a face at a given size, all non-negative
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    /// Distance between consecutive baselines
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// Metrics of one glyph, already scaled to the requested size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphMetrics {
    pub advance_width: f32,
    /// Left edge relative to the pen position
    pub bearing_x: f32,
    /// Bottom edge relative to the baseline (y up)
    pub bearing_y: f32,
    pub width: f32,
    pub height: f32,
    /// Normalized texture coordinates (0.0 to 1.0)
    pub uv_min: (f32, f32),
    pub uv_max: (f32, f32),
}

/// Rendered size of a block of text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
    pub lines: usize,
}

/// Layout information for a single glyph
///
/// Coordinates are relative to the top-left of the text block with y
/// pointing up, so every glyph sits at negative y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphLayout {
    pub char: char,
    pub position_x: f32,
    pub position_y: f32,
    pub width: f32,
    pub height: f32,
    pub uv_min: (f32, f32),
    pub uv_max: (f32, f32),
}

/// A font that can measure and lay out text
pub trait FontFace: Send + Sync + fmt::Debug {
    /// Human-readable face name (usually the file it was loaded from)
    fn name(&self) -> &str;

    /// Vertical metrics at `font_size`
    fn line_metrics(&self, font_size: f32) -> LineMetrics;

    /// Glyph metrics at `font_size`, `None` if the face has no glyph for `c`
    fn glyph(&self, c: char, font_size: f32) -> Option<GlyphMetrics>;

    /// Pixel size glyphs are rasterized at, `None` for faces without bitmaps
    fn raster_size(&self) -> Option<f32> {
        None
    }

    /// The same face rasterized at `size` pixels
    ///
    /// Returns `None` when the face has no bitmaps or cannot be rebuilt; the
    /// caller keeps using the current face in that case.
    fn rasterized_at(&self, _size: f32) -> Option<Arc<dyn FontFace>> {
        None
    }

    /// Calculate the extent of `text` when rendered
    ///
    /// Width is the widest line. Empty text measures 0x0.
    fn measure(&self, text: &str, font_size: f32) -> TextExtent {
        if text.is_empty() || font_size <= 0.0 {
            return TextExtent::default();
        }

        let metrics = self.line_metrics(font_size);
        let mut width = 0.0f32;
        let mut lines = 0;
        for line in text.split('\n') {
            lines += 1;
            let line_width: f32 = line
                .chars()
                .filter_map(|c| self.glyph(c, font_size))
                .map(|g| g.advance_width)
                .sum();
            width = width.max(line_width);
        }

        let height = metrics.ascent
            + metrics.descent
            + (lines - 1) as f32 * metrics.line_height();
        TextExtent {
            width,
            height,
            lines,
        }
    }

    /// Calculate text layout for a string
    fn layout(&self, text: &str, font_size: f32) -> Vec<GlyphLayout> {
        let mut layouts = Vec::with_capacity(text.len());
        if font_size <= 0.0 {
            return layouts;
        }

        let metrics = self.line_metrics(font_size);
        let mut cursor_x = 0.0;
        let mut baseline = -metrics.ascent;

        for c in text.chars() {
            if c == '\n' {
                cursor_x = 0.0;
                baseline -= metrics.line_height();
                continue;
            }

            if let Some(glyph) = self.glyph(c, font_size) {
                if glyph.width > 0.0 && glyph.height > 0.0 {
                    layouts.push(GlyphLayout {
                        char: c,
                        position_x: cursor_x + glyph.bearing_x,
                        position_y: baseline + glyph.bearing_y,
                        width: glyph.width,
                        height: glyph.height,
                        uv_min: glyph.uv_min,
                        uv_max: glyph.uv_max,
                    });
                }
                cursor_x += glyph.advance_width;
            }
        }

        layouts
    }
}

/// Fixed-metric face that needs no font file
///
/// Every printable character advances by 0.6 em and fills the full ascent.
/// Labels fall back to this face so they stay renderable without fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFace;

impl BuiltinFace {
    pub const NAME: &'static str = "builtin";
    pub const ADVANCE: f32 = 0.6;
    pub const ASCENT: f32 = 0.8;
    pub const DESCENT: f32 = 0.2;
}

impl FontFace for BuiltinFace {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn line_metrics(&self, font_size: f32) -> LineMetrics {
        LineMetrics {
            ascent: Self::ASCENT * font_size,
            descent: Self::DESCENT * font_size,
            line_gap: 0.0,
        }
    }

    fn glyph(&self, c: char, font_size: f32) -> Option<GlyphMetrics> {
        if c.is_control() {
            return None;
        }
        let advance = Self::ADVANCE * font_size;
        let (width, height) = if c.is_whitespace() {
            (0.0, 0.0)
        } else {
            (advance, Self::ASCENT * font_size)
        };
        Some(GlyphMetrics {
            advance_width: advance,
            bearing_x: 0.0,
            bearing_y: 0.0,
            width,
            height,
            uv_min: (0.0, 0.0),
            uv_max: (0.0, 0.0),
        })
    }
}
