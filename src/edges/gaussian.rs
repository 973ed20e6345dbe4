//! Separable Gaussian smoothing with border clamping.
//!
//! Kernels are sampled from `exp(−x² / 2σ²)` over `x ∈ [−r, r]` with
//! `r = ceil(3σ)` and normalized to unit sum. A blur runs as two 1-D passes:
//! the full horizontal pass completes before the vertical pass reads from it.
use crate::image::{Grid, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order), centred on the middle tap.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Sampled, normalized Gaussian kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build the kernel for `sigma`. A non-positive or non-finite sigma yields
    /// the identity kernel.
    pub fn new(sigma: f32) -> Self {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Self { taps: vec![1.0] };
        }
        let radius = (3.0 * sigma).ceil() as isize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (-radius..=radius)
            .map(|x| {
                let x = x as f32;
                (-(x * x) / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Blur `src` with `filter`: horizontal pass first, then vertical.
pub fn apply_separable<F: SeparableFilter + ?Sized>(filter: &F, src: &Grid<f32>) -> Grid<f32> {
    let (w, h) = (src.w, src.h);
    let mut out = Grid::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let taps = filter.taps();
    let radius = filter.radius() as isize;

    let mut tmp = Grid::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                acc += tap * tmp.get(x, sy);
            }
            *dst_px = acc;
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_size_follows_three_sigma_radius() {
        assert_eq!(GaussianKernel::new(0.5).taps().len(), 5);
        assert_eq!(GaussianKernel::new(1.0).taps().len(), 7);
        assert_eq!(GaussianKernel::new(1.2).taps().len(), 9);
    }

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = GaussianKernel::new(0.8);
        let taps = k.taps();
        let sum: f32 = taps.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..taps.len() / 2 {
            assert_eq!(taps[i], taps[taps.len() - 1 - i]);
        }
        assert!(taps[k.radius()] > taps[0]);
    }

    #[test]
    fn degenerate_sigma_is_identity() {
        assert_eq!(GaussianKernel::new(0.0).taps(), &[1.0]);
        assert_eq!(GaussianKernel::new(f32::NAN).taps(), &[1.0]);
    }

    #[test]
    fn blur_preserves_constant_grid() {
        let grid = Grid::filled(5, 4, 0.25f32);
        let blurred = apply_separable(&GaussianKernel::new(1.0), &grid);
        assert!(blurred.data.iter().all(|&v| (v - 0.25).abs() < 1e-5));
    }

    #[test]
    fn blur_spreads_an_impulse_symmetrically() {
        let mut grid = Grid::new(7, 7);
        grid.set(3, 3, 1.0f32);
        let blurred = apply_separable(&GaussianKernel::new(0.5), &grid);
        let centre = blurred.get(3, 3);
        assert!(centre < 1.0 && centre > 0.0);
        assert!((blurred.get(2, 3) - blurred.get(4, 3)).abs() < 1e-6);
        assert!((blurred.get(3, 2) - blurred.get(2, 3)).abs() < 1e-6);
        let total: f32 = blurred.data.iter().sum();
        assert!((total - 1.0).abs() < 1e-4);
    }
}
