//! Luminance/orientation to glyph mapping.
pub mod mapper;
pub mod ramps;

pub use mapper::{ramp_index, GlyphMapper, GlyphSource};
pub use ramps::{directional_glyphs, ramp, BOX_DIRECTIONAL, PLAIN_DIRECTIONAL};
