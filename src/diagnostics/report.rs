use super::TimingBreakdown;
use crate::assemble::GlyphGrid;
use crate::geometry::GridGeometry;
use crate::image::Grid;
use crate::options::RampMode;
use serde::Serialize;

/// Result produced by [`Converter::convert_with_report`](crate::Converter).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    #[serde(skip)]
    pub glyphs: GlyphGrid,
    pub trace: PipelineTrace,
}

/// Stage-by-stage description of one conversion.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub geometry: GridGeometry,
    pub ramp_mode: RampMode,
    pub luminance: LuminanceStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeStage>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminanceStats {
    pub min: f32,
    pub mean: f32,
    pub max: f32,
}

impl LuminanceStats {
    pub fn from_grid(grid: &Grid<f32>) -> Self {
        if grid.data.is_empty() {
            return Self::default();
        }
        let (mut min, mut max, mut sum) = (f32::INFINITY, f32::NEG_INFINITY, 0.0f64);
        for &v in &grid.data {
            min = min.min(v);
            max = max.max(v);
            sum += f64::from(v);
        }
        Self {
            min,
            mean: (sum / grid.data.len() as f64) as f32,
            max,
        }
    }
}

/// Edge detection summary; present only for directional renders.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStage {
    pub sigma: f32,
    pub sigma_wide: f32,
    pub narrow_taps: usize,
    pub wide_taps: usize,
    /// Strongest scaled Sobel magnitude before normalization
    pub max_magnitude: f32,
    pub threshold: f32,
    /// Cells whose normalized magnitude exceeds the threshold
    pub candidates: usize,
    /// Cells that ended up with an orientation glyph
    pub directional_glyphs: usize,
}
