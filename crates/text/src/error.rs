use thiserror::Error;

/// Errors that can occur while loading fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// Wrap IO failures when reading font files.
    #[error("failed to read font file {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The font data could not be parsed.
    #[error("failed to parse font: {0}")]
    Parse(String),
    /// An atlas needs at least one character.
    #[error("font atlas character set is empty")]
    EmptyCharset,
    /// Raster size must be positive.
    #[error("invalid raster size {0}")]
    InvalidRasterSize(f32),
    /// None of the well-known system font locations exist.
    #[error("could not find a system font; install DejaVu Sans or specify a font path")]
    NoSystemFont,
}
