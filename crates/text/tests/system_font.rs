//! Measurement against a real font file
//!
//! Every test returns early when no system font is installed.

use labelnode_text::{find_system_font, FontAtlasBuilder, FontFace, FontLoader, DEFAULT_RASTER_SIZE};

fn atlas() -> Option<labelnode_text::FontAtlas> {
    let path = find_system_font().ok()?;
    Some(FontAtlasBuilder::from_file(&path).unwrap().build().unwrap())
}

#[test]
fn measure_scales_linearly() {
    let Some(atlas) = atlas() else {
        return;
    };

    let small = atlas.measure("Joint 3", 12.0);
    let large = atlas.measure("Joint 3", 24.0);

    assert!(small.width > 0.0 && small.height > 0.0);
    assert!((large.width - 2.0 * small.width).abs() < 1e-3);
    assert!((large.height - 2.0 * small.height).abs() < 1e-3);

    let metrics = atlas.line_metrics(12.0);
    assert!((small.height - (metrics.ascent + metrics.descent)).abs() < 1e-4);
}

#[test]
fn layout_stays_near_extent() {
    let Some(atlas) = atlas() else {
        return;
    };

    let extent = atlas.measure("Hello World", 12.0);
    // Bitmaps round outward by at most one raster pixel
    let slack = 12.0 / DEFAULT_RASTER_SIZE;
    for glyph in atlas.layout("Hello World", 12.0) {
        assert!(glyph.position_x >= -slack, "{glyph:?}");
        assert!(glyph.position_x + glyph.width <= extent.width + slack, "{glyph:?}");
        assert!(glyph.position_y >= -extent.height - slack, "{glyph:?}");
        assert!(glyph.position_y + glyph.height <= slack, "{glyph:?}");
    }
}

#[test]
fn loader_caches_real_fonts() {
    let Ok(path) = find_system_font() else {
        return;
    };

    let mut loader = FontLoader::default();
    let first = loader.resolve(&path);
    let second = loader.resolve(&path);

    assert_eq!(first.name(), path);
    assert_eq!(first.raster_size(), Some(DEFAULT_RASTER_SIZE));
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(loader.cached(), 1);
}
