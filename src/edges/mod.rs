//! Edge detection on the luminance grid: difference of Gaussians followed by
//! Sobel gradients.
//!
//! - Smooth the luminance grid at two scales and subtract them (DoG). The
//!   response is band-pass: flat regions vanish and cell-scale transitions
//!   stand out.
//! - Run Sobel on the DoG interior, scaling `gx`/`gy` by the inverse cell
//!   width/height so tall glyph cells do not bias orientation.
//! - Normalize magnitudes by the grid maximum (floored to
//!   [`MIN_NORMALIZER`]) so thresholds are scene-relative in [0, 1].
//!
//! Border cells never carry an edge: they keep `EdgeInfo::default()`.

pub mod gaussian;
pub mod grad;

use crate::geometry::GridGeometry;
use crate::image::Grid;
use crate::options::EdgeParams;
use gaussian::{apply_separable, GaussianKernel, SeparableFilter};
use log::debug;
use serde::Serialize;
use std::f32::consts::PI;
use std::time::Instant;

pub use grad::{sobel_interior, Grad};

/// Lower bound applied to the maximum magnitude before normalizing.
pub const MIN_NORMALIZER: f32 = 0.01;

/// Normalized gradient of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct EdgeInfo {
    /// Magnitude in [0, 1], relative to the strongest cell of the grid
    pub magnitude: f32,
    /// Gradient direction `atan2(gy, gx)` in (−π, π]
    pub angle: f32,
}

pub type EdgeGrid = Grid<EdgeInfo>;

/// Edge grid plus the measurements the diagnostics report.
#[derive(Clone, Debug)]
pub struct EdgeDetection {
    pub edges: EdgeGrid,
    /// Largest scaled magnitude before normalization
    pub max_magnitude: f32,
    pub narrow_taps: usize,
    pub wide_taps: usize,
    pub dog_ms: f64,
    pub sobel_ms: f64,
}

/// `blur(sigma) − blur(sigma_wide)`, same dimensions as `l`, unclamped.
pub fn difference_of_gaussians(l: &Grid<f32>, sigma: f32, sigma_wide: f32) -> Grid<f32> {
    dog_with_kernels(l, &GaussianKernel::new(sigma), &GaussianKernel::new(sigma_wide))
}

fn dog_with_kernels<F: SeparableFilter>(l: &Grid<f32>, narrow: &F, wide: &F) -> Grid<f32> {
    let narrow = apply_separable(narrow, l);
    let wide = apply_separable(wide, l);
    narrow.zip_map(&wide, |a, b| a - b)
}

/// Compute the per-cell edge grid for a luminance grid laid out by `geometry`.
pub fn detect_edges(l: &Grid<f32>, geometry: &GridGeometry, params: &EdgeParams) -> EdgeDetection {
    let (sigma, sigma_wide) = params.resolved_sigmas();
    let narrow = GaussianKernel::new(sigma);
    let wide = GaussianKernel::new(sigma_wide);

    if l.w == 0 || l.h == 0 {
        return EdgeDetection {
            edges: Grid::new(l.w, l.h),
            max_magnitude: 0.0,
            narrow_taps: narrow.taps().len(),
            wide_taps: wide.taps().len(),
            dog_ms: 0.0,
            sobel_ms: 0.0,
        };
    }

    let dog_start = Instant::now();
    let dog = dog_with_kernels(l, &narrow, &wide);
    let dog_ms = dog_start.elapsed().as_secs_f64() * 1000.0;

    let sobel_start = Instant::now();
    let scale_x = 1.0 / geometry.cell_width_px.max(1) as f32;
    let scale_y = 1.0 / geometry.cell_height_px.max(1) as f32;
    let grad = sobel_interior(&dog, scale_x, scale_y);

    let max_magnitude = grad.mag.data.iter().copied().fold(0.0f32, f32::max);
    let normalizer = max_magnitude.max(MIN_NORMALIZER);

    let mut edges = Grid::new(l.w, l.h);
    for (i, cell) in edges.data.iter_mut().enumerate() {
        let mag = grad.mag.data[i];
        if mag <= 0.0 {
            continue;
        }
        let mut angle = grad.gy.data[i].atan2(grad.gx.data[i]);
        if angle <= -PI {
            angle += 2.0 * PI;
        }
        *cell = EdgeInfo {
            magnitude: (mag / normalizer).min(1.0),
            angle,
        };
    }
    let sobel_ms = sobel_start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "edges: sigma={sigma:.3}/{sigma_wide:.3} taps={}/{} max_mag={max_magnitude:.5}",
        narrow.taps().len(),
        wide.taps().len()
    );

    EdgeDetection {
        edges,
        max_magnitude,
        narrow_taps: narrow.taps().len(),
        wide_taps: wide.taps().len(),
        dog_ms,
        sobel_ms,
    }
}
