//! Glyph grid geometry derived from the bitmap size and cell shape.
use serde::Serialize;

/// Substituted when a cell extent computes to zero (degenerate input only).
const FALLBACK_CELL_WIDTH_PX: usize = 8;
const FALLBACK_CELL_HEIGHT_PX: usize = 16;

/// Column/row counts, per-cell pixel extents and the sampling pitch of one
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub cols: usize,
    pub rows: usize,
    /// `W / cols`; scales horizontal gradients
    pub cell_width_px: usize,
    /// `H / rows`; scales vertical gradients
    pub cell_height_px: usize,
    /// Horizontal step between sampled cells (`cell_size`)
    pub sample_width_px: usize,
    /// Vertical step between sampled cells (`cell_size · aspect`, truncated)
    pub sample_height_px: usize,
}

impl GridGeometry {
    /// `cols = ceil(W / cell_size)`, `rows = ceil(H / (cell_size · aspect))`,
    /// each at least 1 and at most one per pixel column/row. Never fails.
    pub fn compute(width: usize, height: usize, cell_size: usize, cell_aspect: f32) -> Self {
        let sample_width_px = cell_size.clamp(1, width.max(1));
        let cols = width.div_ceil(sample_width_px).max(1);

        let cell_h = cell_size.max(1) as f64 * f64::from(cell_aspect);
        let (rows, sample_height_px) = if cell_h.is_finite() && cell_h > 0.0 {
            let rows = ((height as f64 / cell_h).ceil() as usize).clamp(1, height.max(1));
            (rows, (cell_h as usize).clamp(1, height.max(1)))
        } else {
            (1, height.max(1))
        };

        let mut cell_width_px = width / cols;
        let mut cell_height_px = height / rows;
        if cell_width_px == 0 || cell_height_px == 0 {
            cell_width_px = FALLBACK_CELL_WIDTH_PX;
            cell_height_px = FALLBACK_CELL_HEIGHT_PX;
        }

        Self {
            cols,
            rows,
            cell_width_px,
            cell_height_px,
            sample_width_px,
            sample_height_px,
        }
    }

    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }

    /// Pixel span `[x0, x1)` of column `c`. Cells step by the sampling pitch;
    /// the last column runs to the image edge.
    pub fn column_span(&self, c: usize, width: usize) -> (usize, usize) {
        span(c, self.cols, self.sample_width_px, width)
    }

    /// Pixel span `[y0, y1)` of row `r`; the last row runs to the image edge.
    pub fn row_span(&self, r: usize, height: usize) -> (usize, usize) {
        span(r, self.rows, self.sample_height_px, height)
    }
}

fn span(i: usize, count: usize, step: usize, extent: usize) -> (usize, usize) {
    let start = i.saturating_mul(step).min(extent);
    let end = if i + 1 >= count {
        extent
    } else {
        start.saturating_add(step).min(extent)
    };
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_geometry() {
        let g = GridGeometry::compute(160, 96, 8, 2.0);
        assert_eq!(
            g,
            GridGeometry {
                cols: 20,
                rows: 6,
                cell_width_px: 8,
                cell_height_px: 16,
                sample_width_px: 8,
                sample_height_px: 16,
            }
        );
    }

    #[test]
    fn partial_cells_round_up() {
        let g = GridGeometry::compute(100, 50, 8, 2.3);
        assert_eq!(g.cols, 13);
        assert_eq!(g.rows, 3);
        assert_eq!(g.cell_width_px, 7);
        assert_eq!(g.cell_height_px, 16);
        assert_eq!((g.sample_width_px, g.sample_height_px), (8, 18));
    }

    #[test]
    fn degenerate_sizes_floor_to_one_cell() {
        let g = GridGeometry::compute(0, 0, 8, 2.0);
        assert_eq!((g.cols, g.rows), (1, 1));
        assert_eq!((g.cell_width_px, g.cell_height_px), (8, 16));
    }

    #[test]
    fn empty_width_falls_back_for_both_extents() {
        let g = GridGeometry::compute(0, 40, 8, 2.0);
        assert_eq!((g.cols, g.rows), (1, 3));
        assert_eq!((g.cell_width_px, g.cell_height_px), (8, 16));
    }

    #[test]
    fn tiny_aspect_caps_rows_at_pixel_lines() {
        let g = GridGeometry::compute(1000, 10, 1, 1e-30);
        assert_eq!((g.cols, g.rows), (1000, 10));
        assert_eq!((g.cell_width_px, g.cell_height_px), (1, 1));
        assert_eq!((g.sample_width_px, g.sample_height_px), (1, 1));
        assert_eq!(g.cells(), 10_000);
    }

    #[test]
    fn huge_cells_collapse_to_one() {
        let g = GridGeometry::compute(30, 20, usize::MAX, 1e30);
        assert_eq!((g.cols, g.rows), (1, 1));
        assert_eq!(g.column_span(0, 30), (0, 30));
        assert_eq!(g.row_span(0, 20), (0, 20));
    }

    #[test]
    fn spans_step_by_cell_size_and_truncate_the_last_cell() {
        let g = GridGeometry::compute(12, 1, 5, 1.0);
        assert_eq!(g.cols, 3);
        let spans: Vec<_> = (0..g.cols).map(|c| g.column_span(c, 12)).collect();
        assert_eq!(spans, vec![(0, 5), (5, 10), (10, 12)]);
    }

    #[test]
    fn last_row_absorbs_truncated_pitch() {
        // 5 · 2.5 = 12.5 pixel lines per cell, sampled every 12.
        let g = GridGeometry::compute(10, 50, 5, 2.5);
        assert_eq!(g.rows, 4);
        assert_eq!(g.sample_height_px, 12);
        let spans: Vec<_> = (0..g.rows).map(|r| g.row_span(r, 50)).collect();
        assert_eq!(spans, vec![(0, 12), (12, 24), (24, 36), (36, 50)]);
    }
}
