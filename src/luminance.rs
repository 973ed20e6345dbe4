//! Per-cell luminance sampling.
//!
//! The bitmap is split into `rows × cols` non-overlapping rectangles stepping
//! by the geometry's sampling pitch; the last column and row are cut at the
//! image edge, so every pixel belongs to exactly one cell. Each cell stores the mean Rec. 709 luminance of its
//! sufficiently opaque pixels, normalized to [0, 1].
//!
//! Rows are independent and are sampled in parallel; each worker writes only
//! its own output row.
use crate::geometry::GridGeometry;
use crate::image::{Grid, ImageView};
use rayon::prelude::*;

/// Pixels with alpha below this value do not contribute to a cell.
pub const ALPHA_CUTOFF: u8 = 10;

const REC709_R: f32 = 0.2126;
const REC709_G: f32 = 0.7152;
const REC709_B: f32 = 0.0722;

const CONTRAST_PIVOT: f32 = 0.5;
const CONTRAST_GAIN: f32 = 1.7;

/// Rec. 709 luminance of one RGBA8 pixel in [0, 1]; alpha is ignored.
#[inline]
pub fn pixel_luminance(px: [u8; 4]) -> f32 {
    (REC709_R * f32::from(px[0]) + REC709_G * f32::from(px[1]) + REC709_B * f32::from(px[2]))
        / 255.0
}

/// Fixed-pivot contrast curve `clamp01((l − 0.5)·1.7 + 0.5)`.
#[inline]
pub fn apply_contrast(l: f32) -> f32 {
    ((l - CONTRAST_PIVOT) * CONTRAST_GAIN + CONTRAST_PIVOT).clamp(0.0, 1.0)
}

/// Sample the luminance grid for `geometry` from an RGBA bitmap.
///
/// Cells without any pixel at or above [`ALPHA_CUTOFF`] are black (0.0).
pub fn sample_luminance<I>(image: &I, geometry: &GridGeometry, high_contrast: bool) -> Grid<f32>
where
    I: ImageView<Pixel = [u8; 4]> + Sync,
{
    let (cols, rows) = (geometry.cols, geometry.rows);
    let mut out = Grid::new(cols, rows);
    if cols == 0 || rows == 0 {
        return out;
    }
    let (w, h) = (image.width(), image.height());
    let x_spans: Vec<(usize, usize)> = (0..cols).map(|c| geometry.column_span(c, w)).collect();

    out.data
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            let (y0, y1) = geometry.row_span(r, h);
            for (cell, &(x0, x1)) in out_row.iter_mut().zip(&x_spans) {
                let mut sum = 0.0f32;
                let mut count = 0usize;
                for y in y0..y1 {
                    for &px in &image.row(y)[x0..x1] {
                        if px[3] < ALPHA_CUTOFF {
                            continue;
                        }
                        sum += pixel_luminance(px);
                        count += 1;
                    }
                }
                let mean = if count == 0 { 0.0 } else { sum / count as f32 };
                *cell = if high_contrast {
                    apply_contrast(mean)
                } else {
                    mean.clamp(0.0, 1.0)
                };
            }
        });

    out
}
