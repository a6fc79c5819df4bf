//! Text measurement and glyph layout for labelnode
//!
//! Labels talk to fonts only through the [`FontFace`] trait. Two faces ship
//! with the crate:
//!
//! - [`FontAtlas`]: a fontdue-rasterized atlas loaded from a TTF/OTF file
//! - [`BuiltinFace`]: fixed metrics, used whenever no font can be loaded
//!
//! [`FontLoader`] resolves font paths to faces, caching parsed atlases.

pub mod atlas;
pub mod error;
pub mod face;
pub mod loader;

pub use atlas::{FontAtlas, FontAtlasBuilder, GlyphInfo, ASCII_RANGE, DEFAULT_RASTER_SIZE};
pub use error::FontError;
pub use face::{BuiltinFace, FontFace, GlyphLayout, GlyphMetrics, LineMetrics, TextExtent};
pub use loader::{builtin_face, find_system_font, resolve_font, FontLoader};
