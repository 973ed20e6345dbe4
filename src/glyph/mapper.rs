//! Per-cell glyph selection.
//!
//! Luminance cells index into the active ramp; when directional rendering is
//! on, cells whose normalized edge magnitude strictly exceeds the threshold
//! take an orientation glyph instead, unless that glyph is blank.
use super::ramps::{directional_glyphs, ramp};
use crate::angle::{edge_orientation, orientation_sector};
use crate::edges::{EdgeGrid, EdgeInfo};
use crate::image::{Grid, ImageView};
use crate::options::RenderOptions;
use rayon::prelude::*;

/// Which rule produced a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphSource {
    Luminance,
    Edge,
}

/// Ramp index for luminance `l`: `floor(l · (len − 1))` clamped to the ramp.
#[inline]
pub fn ramp_index(l: f32, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let idx = (l * last as f32).floor();
    if idx >= 0.0 {
        (idx as usize).min(last)
    } else {
        0
    }
}

#[derive(Clone, Debug)]
pub struct GlyphMapper {
    ramp: Vec<char>,
    directional: [char; 4],
    directional_render: bool,
    edge_threshold: f32,
}

impl GlyphMapper {
    pub fn new(options: &RenderOptions) -> Self {
        let mode = options.ramp_mode();
        Self {
            ramp: ramp(mode, options.reverse_polarity()),
            directional: directional_glyphs(mode),
            directional_render: options.directional_render(),
            edge_threshold: options.edge_threshold(),
        }
    }

    /// Override the directional set (horizontal, diagonal-down, vertical,
    /// diagonal-up).
    pub fn with_directional_glyphs(mut self, glyphs: [char; 4]) -> Self {
        self.directional = glyphs;
        self
    }

    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }

    #[inline]
    pub fn luminance_glyph(&self, l: f32) -> char {
        self.ramp[ramp_index(l, self.ramp.len())]
    }

    /// Orientation glyph for `edge`, or `None` when the cell stays in
    /// luminance mode (directional render off, magnitude at or below the
    /// threshold, or a blank orientation glyph).
    #[inline]
    pub fn directional_glyph(&self, edge: &EdgeInfo) -> Option<char> {
        if !self.directional_render || edge.magnitude <= self.edge_threshold {
            return None;
        }
        let glyph = self.directional[orientation_sector(edge_orientation(edge.angle))];
        (!glyph.is_whitespace()).then_some(glyph)
    }

    #[inline]
    pub fn map(&self, l: f32, edge: Option<&EdgeInfo>) -> (char, GlyphSource) {
        match edge.and_then(|e| self.directional_glyph(e)) {
            Some(glyph) => (glyph, GlyphSource::Edge),
            None => (self.luminance_glyph(l), GlyphSource::Luminance),
        }
    }

    /// Map every cell of `luminance` (and `edges`, when present) to a glyph.
    /// Returns the glyph grid and the number of edge-sourced glyphs.
    pub fn map_grid(&self, luminance: &Grid<f32>, edges: Option<&EdgeGrid>) -> (Grid<char>, usize) {
        let (w, h) = (luminance.w, luminance.h);
        let mut glyphs = Grid::filled(w, h, ' ');
        if w == 0 || h == 0 {
            return (glyphs, 0);
        }
        let edge_count = glyphs
            .data
            .par_chunks_mut(w)
            .enumerate()
            .map(|(y, out_row)| {
                let lum_row = luminance.row(y);
                let edge_row = edges.map(|e| e.row(y));
                let mut count = 0usize;
                for (x, out) in out_row.iter_mut().enumerate() {
                    let (glyph, source) = self.map(lum_row[x], edge_row.map(|r| &r[x]));
                    if source == GlyphSource::Edge {
                        count += 1;
                    }
                    *out = glyph;
                }
                count
            })
            .sum();
        (glyphs, edge_count)
    }
}
