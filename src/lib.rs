#![doc = include_str!("../README.md")]

// Pipeline stages
pub mod assemble;
pub mod converter;
pub mod edges;
pub mod geometry;
pub mod glyph;
pub mod luminance;
pub mod options;

// Supporting modules
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::assemble::{assemble, GlyphGrid};
pub use crate::converter::{convert_bytes, convert_file, Converter};
pub use crate::error::{ConfigError, ConvertError, OptionsError};
pub use crate::geometry::GridGeometry;
pub use crate::options::{EdgeParams, RampMode, RenderOptions};

pub use crate::diagnostics::{ConversionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mezzotone::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 32usize);
/// let pixels = vec![[200u8, 120, 40, 255]; w * h];
/// let bitmap = RgbaBitmap::new(w, h, pixels).unwrap();
///
/// let converter = Converter::new(RenderOptions::default());
/// print!("{}", converter.convert_to_string(&bitmap.as_view()));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba8, RgbaBitmap};
    pub use crate::{assemble, Converter, GlyphGrid, RampMode, RenderOptions};
}
