//! Image and grid containers shared by every pipeline stage.
//!
//! - [`ImageView`]/[`ImageViewMut`]: row-oriented read/write access.
//! - [`RgbaBitmap`]/[`ImageRgba8`]: owned and borrowed RGBA8 source images.
//! - [`Grid`]: owned row-major per-cell buffer (luminance, edges, glyphs).
//! - [`io`]: decoding through the `image` crate and small file helpers.
pub mod grid;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::grid::Grid;
pub use self::rgba::{ImageRgba8, RgbaBitmap};
pub use self::traits::{ImageView, ImageViewMut, Rows};
