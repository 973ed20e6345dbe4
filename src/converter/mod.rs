//! Conversion pipeline orchestrating the per-call stages.
//!
//! Stages
//! - Geometry: derive the glyph grid from the bitmap size and cell shape.
//! - Luminance: sample the per-cell mean luminance (optional contrast curve).
//! - Edges: DoG + Sobel on the luminance grid, only for directional renders.
//! - Mapping: luminance/orientation to glyph through the active ramp.
//!
//! Every call allocates fresh grids; a [`Converter`] holds nothing but the
//! options and the resolved ramp, so it can be shared across threads.
//!
//! ```no_run
//! use mezzotone::{convert_file, assemble, RenderOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), mezzotone::ConvertError> {
//! let options = RenderOptions::new(8, 2.0, true, 0.4, false, false, "ASCII")?;
//! let glyphs = convert_file(Path::new("photo.png"), &options)?;
//! print!("{}", assemble(&glyphs));
//! # Ok(())
//! # }
//! ```

use crate::assemble::{assemble, GlyphGrid};
use crate::diagnostics::{
    ConversionReport, EdgeStage, InputDescriptor, LuminanceStats, PipelineTrace, TimingBreakdown,
};
use crate::edges::detect_edges;
use crate::error::ConvertError;
use crate::geometry::GridGeometry;
use crate::glyph::GlyphMapper;
use crate::image::io::{decode_bytes, decode_file};
use crate::image::ImageView;
use crate::luminance::sample_luminance;
use crate::options::RenderOptions;
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Image-to-glyph converter bound to one set of render options.
#[derive(Clone, Debug)]
pub struct Converter {
    options: RenderOptions,
    mapper: GlyphMapper,
}

impl Converter {
    pub fn new(options: RenderOptions) -> Self {
        let mapper = GlyphMapper::new(&options);
        Self { options, mapper }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Grid layout this converter produces for a `width × height` bitmap.
    pub fn geometry(&self, width: usize, height: usize) -> GridGeometry {
        GridGeometry::compute(
            width,
            height,
            self.options.cell_size(),
            self.options.cell_aspect(),
        )
    }

    /// Convert a bitmap into a glyph grid.
    pub fn convert<I>(&self, image: &I) -> GlyphGrid
    where
        I: ImageView<Pixel = [u8; 4]> + Sync,
    {
        self.convert_with_report(image).glyphs
    }

    /// Convert a bitmap and assemble the newline-delimited text.
    pub fn convert_to_string<I>(&self, image: &I) -> String
    where
        I: ImageView<Pixel = [u8; 4]> + Sync,
    {
        assemble(&self.convert(image))
    }

    /// Run the full pipeline and capture a per-stage trace.
    pub fn convert_with_report<I>(&self, image: &I) -> ConversionReport
    where
        I: ImageView<Pixel = [u8; 4]> + Sync,
    {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let geometry = self.geometry(image.width(), image.height());
        info!(
            "converting {}x{} image into {}x{} glyphs ({})",
            image.width(),
            image.height(),
            geometry.cols,
            geometry.rows,
            self.options.ramp_mode()
        );

        let lum_start = Instant::now();
        let luminance = sample_luminance(image, &geometry, self.options.high_contrast());
        timings.push("luminance", lum_start.elapsed().as_secs_f64() * 1000.0);
        let luminance_stats = LuminanceStats::from_grid(&luminance);
        debug!(
            "luminance: min={:.3} mean={:.3} max={:.3}",
            luminance_stats.min, luminance_stats.mean, luminance_stats.max
        );

        let detection = self
            .options
            .directional_render()
            .then(|| detect_edges(&luminance, &geometry, &self.options.edge_params()));
        if let Some(det) = &detection {
            timings.push("dog", det.dog_ms);
            timings.push("sobel", det.sobel_ms);
        }

        let map_start = Instant::now();
        let (glyphs, directional_glyphs) = self
            .mapper
            .map_grid(&luminance, detection.as_ref().map(|d| &d.edges));
        timings.push("mapping", map_start.elapsed().as_secs_f64() * 1000.0);

        let edges = detection.map(|det| {
            let threshold = self.options.edge_threshold();
            let (sigma, sigma_wide) = self.options.edge_params().resolved_sigmas();
            let candidates = det
                .edges
                .data
                .iter()
                .filter(|e| e.magnitude > threshold)
                .count();
            debug!("edges: {candidates} candidates, {directional_glyphs} directional glyphs");
            EdgeStage {
                sigma,
                sigma_wide,
                narrow_taps: det.narrow_taps,
                wide_taps: det.wide_taps,
                max_magnitude: det.max_magnitude,
                threshold,
                candidates,
                directional_glyphs,
            }
        });

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        ConversionReport {
            glyphs,
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: image.width(),
                    height: image.height(),
                },
                geometry,
                ramp_mode: self.options.ramp_mode(),
                luminance: luminance_stats,
                edges,
                timings,
            },
        }
    }
}

/// Decode the image at `path` and convert it.
pub fn convert_file(path: &Path, options: &RenderOptions) -> Result<GlyphGrid, ConvertError> {
    let bitmap = decode_file(path)?;
    Ok(Converter::new(options.clone()).convert(&bitmap.as_view()))
}

/// Decode an in-memory encoded image and convert it.
pub fn convert_bytes(bytes: &[u8], options: &RenderOptions) -> Result<GlyphGrid, ConvertError> {
    let bitmap = decode_bytes(bytes)?;
    Ok(Converter::new(options.clone()).convert(&bitmap.as_view()))
}
