//! Validated render options consumed by every pipeline stage.
//!
//! [`RenderOptions`] can only be obtained through [`RenderOptions::new`] (or
//! `TryFrom<RenderSettings>` in [`crate::config`]), which rejects unknown ramp
//! modes and out-of-domain numbers. Once built the record is immutable.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyph ramp family used to discretize luminance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RampMode {
    Ascii,
    Unicode,
    Dots,
    Rectangles,
    Bars,
    Loading,
}

impl RampMode {
    pub const ALL: [RampMode; 6] = [
        RampMode::Ascii,
        RampMode::Unicode,
        RampMode::Dots,
        RampMode::Rectangles,
        RampMode::Bars,
        RampMode::Loading,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RampMode::Ascii => "ASCII",
            RampMode::Unicode => "UNICODE",
            RampMode::Dots => "DOTS",
            RampMode::Rectangles => "RECTANGLES",
            RampMode::Bars => "BARS",
            RampMode::Loading => "LOADING",
        }
    }

    /// Plain-text family (uses slash/dash/pipe for directional glyphs).
    pub fn is_plain_text(self) -> bool {
        matches!(self, RampMode::Ascii)
    }
}

impl fmt::Display for RampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RampMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RampMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OptionsError::UnknownRampMode(s.to_string()))
    }
}

/// Scales of the difference-of-Gaussians stage.
///
/// - `sigma`: narrow blur (default 0.5).
/// - `sigma_wide`: wide blur; `None` resolves to `max(2·sigma, sigma)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    pub sigma: f32,
    pub sigma_wide: Option<f32>,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            sigma: 0.5,
            sigma_wide: None,
        }
    }
}

impl EdgeParams {
    pub fn resolved_sigmas(&self) -> (f32, f32) {
        let wide = self
            .sigma_wide
            .unwrap_or_else(|| (self.sigma * 2.0).max(self.sigma));
        (self.sigma, wide)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        check_sigma(self.sigma)?;
        if let Some(wide) = self.sigma_wide {
            check_sigma(wide)?;
        }
        Ok(())
    }
}

fn check_sigma(sigma: f32) -> Result<(), OptionsError> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(OptionsError::Sigma(sigma))
    }
}

/// Immutable, validated configuration of one conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    cell_size: usize,
    cell_aspect: f32,
    directional_render: bool,
    edge_threshold: f32,
    reverse_polarity: bool,
    high_contrast: bool,
    ramp_mode: RampMode,
    edge_params: EdgeParams,
}

impl RenderOptions {
    /// Validate loose values into an options record.
    ///
    /// `ramp_mode` is matched case-insensitively against the known names.
    pub fn new(
        cell_size: usize,
        cell_aspect: f32,
        directional_render: bool,
        edge_threshold: f32,
        reverse_polarity: bool,
        high_contrast: bool,
        ramp_mode: &str,
    ) -> Result<Self, OptionsError> {
        let ramp_mode = ramp_mode.parse::<RampMode>()?;
        let options = Self {
            cell_size,
            cell_aspect,
            directional_render,
            edge_threshold,
            reverse_polarity,
            high_contrast,
            ramp_mode,
            edge_params: EdgeParams::default(),
        };
        options.validate()?;
        Ok(options)
    }

    /// Replace the DoG scales, re-validating them.
    pub fn with_edge_params(mut self, edge_params: EdgeParams) -> Result<Self, OptionsError> {
        edge_params.validate()?;
        self.edge_params = edge_params;
        Ok(self)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.cell_size == 0 {
            return Err(OptionsError::CellSize(self.cell_size));
        }
        if !(self.cell_aspect.is_finite() && self.cell_aspect > 0.0) {
            return Err(OptionsError::CellAspect(self.cell_aspect));
        }
        if !(0.0..=1.0).contains(&self.edge_threshold) {
            return Err(OptionsError::EdgeThreshold(self.edge_threshold));
        }
        self.edge_params.validate()
    }

    /// Source pixels per glyph column.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }
    /// Vertical/horizontal ratio of a glyph cell.
    pub fn cell_aspect(&self) -> f32 {
        self.cell_aspect
    }
    pub fn directional_render(&self) -> bool {
        self.directional_render
    }
    /// Literal cutoff on the normalized edge magnitude.
    pub fn edge_threshold(&self) -> f32 {
        self.edge_threshold
    }
    pub fn reverse_polarity(&self) -> bool {
        self.reverse_polarity
    }
    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }
    pub fn ramp_mode(&self) -> RampMode {
        self.ramp_mode
    }
    pub fn edge_params(&self) -> EdgeParams {
        self.edge_params
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 10,
            cell_aspect: 2.3,
            directional_render: false,
            edge_threshold: 0.6,
            reverse_polarity: true,
            high_contrast: true,
            ramp_mode: RampMode::Ascii,
            edge_params: EdgeParams::default(),
        }
    }
}
