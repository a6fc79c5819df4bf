//! Font atlas built with fontdue
//!
//! Glyphs are rasterized once at a fixed raster size and packed into a
//! single grayscale texture. Metrics for any requested size are scaled from
//! the raster size.

use crate::error::FontError;
use crate::face::{FontFace, GlyphMetrics, LineMetrics};
use fontdue::{Font, FontSettings};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Character range for ASCII printable characters
pub const ASCII_RANGE: std::ops::Range<u32> = 32..127;

/// Default rasterization size in pixels
pub const DEFAULT_RASTER_SIZE: f32 = 32.0;

/// A font atlas containing pre-rendered glyphs
pub struct FontAtlas {
    name: String,

    /// Raw font file, kept so the atlas can be rebuilt at another size
    font_data: Arc<[u8]>,

    /// Characters rasterized into the atlas, in packing order
    chars: Vec<char>,

    /// Atlas texture data (grayscale)
    pub texture_data: Vec<u8>,

    /// Atlas dimensions
    pub width: u32,
    pub height: u32,

    /// Glyph metrics and positions in atlas
    glyphs: HashMap<char, GlyphInfo>,

    /// Line metrics at `raster_size`
    line: LineMetrics,

    /// Font size used for rasterization
    pub raster_size: f32,

    /// Padding around each glyph
    pub padding: u32,
}

impl fmt::Debug for FontAtlas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAtlas")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("glyphs", &self.glyphs.len())
            .field("raster_size", &self.raster_size)
            .finish()
    }
}

/// Information about a glyph in the atlas
#[derive(Debug, Clone, Copy)]
pub struct GlyphInfo {
    /// Position in atlas texture (pixels)
    pub atlas_x: u32,
    pub atlas_y: u32,

    /// Glyph dimensions (pixels)
    pub width: u32,
    pub height: u32,

    /// Glyph metrics (for layout)
    pub advance_width: f32,
    pub bearing_x: f32,
    pub bearing_y: f32,

    /// Normalized texture coordinates (0.0 to 1.0)
    pub uv_min: (f32, f32),
    pub uv_max: (f32, f32),
}

impl FontAtlas {
    /// Get glyph information for a character
    pub fn get_glyph(&self, c: char) -> Option<&GlyphInfo> {
        self.glyphs.get(&c)
    }
}

impl FontFace for FontAtlas {
    fn name(&self) -> &str {
        &self.name
    }

    fn line_metrics(&self, font_size: f32) -> LineMetrics {
        let scale = font_size / self.raster_size;
        LineMetrics {
            ascent: self.line.ascent * scale,
            descent: self.line.descent * scale,
            line_gap: self.line.line_gap * scale,
        }
    }

    fn glyph(&self, c: char, font_size: f32) -> Option<GlyphMetrics> {
        let scale = font_size / self.raster_size;
        self.get_glyph(c).map(|g| GlyphMetrics {
            advance_width: g.advance_width * scale,
            bearing_x: g.bearing_x * scale,
            bearing_y: g.bearing_y * scale,
            width: g.width as f32 * scale,
            height: g.height as f32 * scale,
            uv_min: g.uv_min,
            uv_max: g.uv_max,
        })
    }

    fn raster_size(&self) -> Option<f32> {
        Some(self.raster_size)
    }

    fn rasterized_at(&self, size: f32) -> Option<Arc<dyn FontFace>> {
        let builder = FontAtlasBuilder::new(self.font_data.to_vec())
            .with_name(self.name.clone())
            .with_raster_size(size)
            .with_padding(self.padding)
            .with_chars(self.chars.clone());
        match builder.build() {
            Ok(atlas) => Some(Arc::new(atlas)),
            Err(err) => {
                warn!("Cannot rasterize '{}' at size {}: {err}", self.name, size);
                None
            }
        }
    }
}

/// Builder for creating font atlases
pub struct FontAtlasBuilder {
    name: String,
    font_data: Vec<u8>,
    raster_size: f32,
    padding: u32,
    chars: Vec<char>,
}

impl FontAtlasBuilder {
    /// Create a new builder from font data
    pub fn new(font_data: Vec<u8>) -> Self {
        Self {
            name: String::from("memory"),
            font_data,
            raster_size: DEFAULT_RASTER_SIZE,
            padding: 2,
            chars: ASCII_RANGE.filter_map(char::from_u32).collect(),
        }
    }

    /// Load font from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let font_data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(font_data).with_name(path.display().to_string()))
    }

    /// Set the face name reported by the atlas
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the font size for rasterization
    pub fn with_raster_size(mut self, size: f32) -> Self {
        self.raster_size = size;
        self
    }

    /// Set padding around glyphs
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set custom character set
    pub fn with_chars(mut self, chars: Vec<char>) -> Self {
        self.chars = chars;
        self
    }

    /// Build the font atlas
    pub fn build(self) -> Result<FontAtlas, FontError> {
        if self.chars.is_empty() {
            return Err(FontError::EmptyCharset);
        }
        if self.raster_size.is_nan() || self.raster_size <= 0.0 {
            return Err(FontError::InvalidRasterSize(self.raster_size));
        }

        info!(
            "Building font atlas '{}' with {} characters at size {}",
            self.name,
            self.chars.len(),
            self.raster_size
        );

        let padding = self.padding;
        let raster_size = self.raster_size;
        let chars = self.chars;
        let name = self.name;

        let font_data: Arc<[u8]> = self.font_data.into();
        let font = Font::from_bytes(&*font_data, FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;

        let line = font
            .horizontal_line_metrics(raster_size)
            .map(|m| LineMetrics {
                ascent: m.ascent,
                descent: -m.descent,
                line_gap: m.line_gap,
            })
            .unwrap_or(LineMetrics {
                ascent: raster_size,
                descent: 0.0,
                line_gap: 0.0,
            });

        // Rasterize all glyphs to measure sizes
        let glyph_data: Vec<_> = chars
            .iter()
            .map(|&c| {
                let (metrics, bitmap) = font.rasterize(c, raster_size);
                (c, metrics, bitmap)
            })
            .collect();

        let (atlas_width, atlas_height, positions) = pack_glyphs(&glyph_data, padding);

        debug!("Atlas dimensions: {}x{} pixels", atlas_width, atlas_height);

        let mut texture_data = vec![0u8; (atlas_width * atlas_height) as usize];

        let mut glyphs = HashMap::with_capacity(glyph_data.len());
        for ((c, metrics, bitmap), &(x, y)) in glyph_data.iter().zip(&positions) {
            for row in 0..metrics.height {
                let src = &bitmap[row * metrics.width..(row + 1) * metrics.width];
                let dst_start = ((y + row as u32) * atlas_width + x) as usize;
                texture_data[dst_start..dst_start + metrics.width].copy_from_slice(src);
            }

            let uv_min = (
                x as f32 / atlas_width as f32,
                y as f32 / atlas_height as f32,
            );
            let uv_max = (
                (x + metrics.width as u32) as f32 / atlas_width as f32,
                (y + metrics.height as u32) as f32 / atlas_height as f32,
            );

            glyphs.insert(
                *c,
                GlyphInfo {
                    atlas_x: x,
                    atlas_y: y,
                    width: metrics.width as u32,
                    height: metrics.height as u32,
                    advance_width: metrics.advance_width,
                    bearing_x: metrics.xmin as f32,
                    bearing_y: metrics.ymin as f32,
                    uv_min,
                    uv_max,
                },
            );
        }

        info!(
            "Font atlas built successfully: {} glyphs, {}x{} texture",
            glyphs.len(),
            atlas_width,
            atlas_height
        );

        Ok(FontAtlas {
            name,
            font_data,
            chars,
            texture_data,
            width: atlas_width,
            height: atlas_height,
            glyphs,
            line,
            raster_size,
            padding,
        })
    }
}

/// Maximum atlas width before wrapping to the next row
const MAX_ATLAS_WIDTH: u32 = 2048;

/// Pack glyphs into atlas using row packing
fn pack_glyphs(
    glyphs: &[(char, fontdue::Metrics, Vec<u8>)],
    padding: u32,
) -> (u32, u32, Vec<(u32, u32)>) {
    let sizes: Vec<(u32, u32)> = glyphs
        .iter()
        .map(|(_, m, _)| (m.width as u32, m.height as u32))
        .collect();
    pack_rows(&sizes, padding)
}

fn pack_rows(sizes: &[(u32, u32)], padding: u32) -> (u32, u32, Vec<(u32, u32)>) {
    let mut current_x = padding;
    let mut current_y = padding;
    let mut row_height = 0u32;
    let mut max_width = 0u32;
    let mut positions = Vec::with_capacity(sizes.len());

    for &(width, height) in sizes {
        let glyph_width = width + padding * 2;
        let glyph_height = height + padding * 2;

        if current_x + glyph_width > MAX_ATLAS_WIDTH {
            current_x = padding;
            current_y += row_height + padding;
            row_height = 0;
        }

        positions.push((current_x, current_y));

        current_x += glyph_width;
        row_height = row_height.max(glyph_height);
        max_width = max_width.max(current_x);
    }

    let atlas_width = max_width.max(1).next_power_of_two();
    let atlas_height = (current_y + row_height + padding).max(1).next_power_of_two();

    (atlas_width, atlas_height, positions)
}
