//! Font lookup with fallback and caching

use crate::atlas::{FontAtlasBuilder, DEFAULT_RASTER_SIZE};
use crate::error::FontError;
use crate::face::{BuiltinFace, FontFace};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Number of parsed fonts kept by [`FontLoader::default`]
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Well-known font locations checked by [`find_system_font`]
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/SFNSText.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Try to find a usable system font
pub fn find_system_font() -> Result<String, FontError> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .find(|path| Path::new(path).exists())
        .map(|path| path.to_string())
        .ok_or(FontError::NoSystemFont)
}

/// The face used whenever a font cannot be loaded
pub fn builtin_face() -> Arc<dyn FontFace> {
    Arc::new(BuiltinFace)
}

/// Resolve `path` to a face without caching, falling back to the builtin face
pub fn resolve_font(path: &str) -> Arc<dyn FontFace> {
    FontLoader::new(1).resolve(path)
}

/// Loads font files into atlases and keeps recently used ones around
pub struct FontLoader {
    cache: LruCache<String, Arc<dyn FontFace>>,
    raster_size: f32,
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl FontLoader {
    /// Create a loader caching up to `capacity` fonts (at least one)
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(cap),
            raster_size: DEFAULT_RASTER_SIZE,
        }
    }

    /// Builder: Set the rasterization size for newly loaded atlases
    pub fn with_raster_size(mut self, size: f32) -> Self {
        self.raster_size = size;
        self
    }

    /// Load the font at `path`, reusing a cached atlas when possible
    pub fn load(&mut self, path: &str) -> Result<Arc<dyn FontFace>, FontError> {
        if let Some(face) = self.cache.get(path) {
            debug!("Font cache hit for {}", path);
            return Ok(Arc::clone(face));
        }

        let atlas = FontAtlasBuilder::from_file(path)?
            .with_raster_size(self.raster_size)
            .build()?;
        let face: Arc<dyn FontFace> = Arc::new(atlas);
        self.cache.put(path.to_string(), Arc::clone(&face));
        Ok(face)
    }

    /// Load the font at `path`, or fall back to the builtin face
    ///
    /// An empty path selects the builtin face directly.
    pub fn resolve(&mut self, path: &str) -> Arc<dyn FontFace> {
        if path.is_empty() {
            return builtin_face();
        }
        match self.load(path) {
            Ok(face) => face,
            Err(err) => {
                warn!("{err}. Falling back to builtin font");
                builtin_face()
            }
        }
    }

    /// Number of cached fonts
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
