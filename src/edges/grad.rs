//! Sobel gradients over the interior of a cell grid.
//!
//! - Convolves the 3×3 Sobel pair on every cell that has a full neighbourhood;
//!   the outermost ring stays zero.
//! - Scales `gx` and `gy` by per-axis factors so that non-square cells do not
//!   bias the orientation.
//! - Outputs per-cell `gx`, `gy` and `mag = sqrt(gx² + gy²)`.
use crate::image::{Grid, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-cell gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (Sobel X, scaled)
    pub gx: Grid<f32>,
    /// Vertical derivative (Sobel Y, scaled)
    pub gy: Grid<f32>,
    /// Euclidean magnitude per cell: `sqrt(gx^2 + gy^2)`
    pub mag: Grid<f32>,
}

/// Compute scaled Sobel gradients on the interior cells of `l`.
///
/// `scale_x` multiplies `gx` and `scale_y` multiplies `gy`. Grids narrower or
/// shorter than 3 cells have no interior and come back all zero.
pub fn sobel_interior(l: &Grid<f32>, scale_x: f32, scale_y: f32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut gx = Grid::new(w, h);
    let mut gy = Grid::new(w, h);
    let mut mag = Grid::new(w, h);

    if w < 3 || h < 3 {
        return Grad { gx, gy, mag };
    }

    for y in 1..h - 1 {
        let rows = [l.row(y - 1), l.row(y), l.row(y + 1)];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 1..w - 1 {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x - 1] * kx_row[0] + row[x] * kx_row[1] + row[x + 1] * kx_row[2];
                sum_y += row[x - 1] * ky_row[0] + row[x] * ky_row[1] + row[x + 1] * ky_row[2];
            }
            let sx = sum_x * scale_x;
            let sy = sum_y * scale_y;
            out_gx[x] = sx;
            out_gy[x] = sy;
            out_mag[x] = (sx * sx + sy * sy).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_x(w: usize, h: usize) -> Grid<f32> {
        let mut g = Grid::new(w, h);
        for y in 0..h {
            for x in 0..w {
                g.set(x, y, x as f32);
            }
        }
        g
    }

    #[test]
    fn linear_ramp_has_constant_interior_gradient() {
        let grad = sobel_interior(&ramp_x(5, 4), 1.0, 1.0);
        for y in 1..3 {
            for x in 1..4 {
                assert_eq!(grad.gx.get(x, y), 8.0);
                assert_eq!(grad.gy.get(x, y), 0.0);
                assert_eq!(grad.mag.get(x, y), 8.0);
            }
        }
    }

    #[test]
    fn border_ring_stays_zero() {
        let grad = sobel_interior(&ramp_x(5, 4), 1.0, 1.0);
        for x in 0..5 {
            assert_eq!(grad.mag.get(x, 0), 0.0);
            assert_eq!(grad.mag.get(x, 3), 0.0);
        }
        for y in 0..4 {
            assert_eq!(grad.mag.get(0, y), 0.0);
            assert_eq!(grad.mag.get(4, y), 0.0);
        }
    }

    #[test]
    fn axis_scales_apply_per_component() {
        let grad = sobel_interior(&ramp_x(4, 4), 0.125, 0.0625);
        assert_eq!(grad.gx.get(1, 1), 1.0);
    }

    #[test]
    fn tiny_grids_have_no_interior() {
        let grad = sobel_interior(&ramp_x(2, 5), 1.0, 1.0);
        assert!(grad.mag.data.iter().all(|&m| m == 0.0));
    }
}
