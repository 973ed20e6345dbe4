//! JSON runtime configuration for the `mezzotone` binary.
//!
//! ```json
//! {
//!   "input": "photo.png",
//!   "render": { "cell_size": 8, "cell_aspect": 2.0, "ramp_mode": "DOTS" },
//!   "output": { "text": "photo.txt", "report_json": "photo.report.json" }
//! }
//! ```
//!
//! Every `render` key is optional and defaults to the interactive front end's
//! initial settings.
use crate::error::{ConfigError, OptionsError};
use crate::options::{EdgeParams, RenderOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Loose, unvalidated render settings as they appear in a config file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub cell_size: usize,
    pub cell_aspect: f32,
    pub directional_render: bool,
    pub edge_threshold: f32,
    pub reverse_polarity: bool,
    pub high_contrast: bool,
    pub ramp_mode: String,
    pub edge: EdgeParams,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_size: 10,
            cell_aspect: 2.3,
            directional_render: false,
            edge_threshold: 0.6,
            reverse_polarity: true,
            high_contrast: true,
            ramp_mode: "ASCII".to_string(),
            edge: EdgeParams::default(),
        }
    }
}

impl TryFrom<&RenderSettings> for RenderOptions {
    type Error = OptionsError;

    fn try_from(s: &RenderSettings) -> Result<Self, Self::Error> {
        RenderOptions::new(
            s.cell_size,
            s.cell_aspect,
            s.directional_render,
            s.edge_threshold,
            s.reverse_polarity,
            s.high_contrast,
            &s.ramp_mode,
        )?
        .with_edge_params(s.edge)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Destination of the glyph text; stdout when absent.
    pub text: Option<PathBuf>,
    /// Destination of the JSON conversion report.
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RuntimeConfig {
    pub fn render_options(&self) -> Result<RenderOptions, OptionsError> {
        RenderOptions::try_from(&self.render)
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<RuntimeConfig, ConfigError> {
    let config: RuntimeConfig =
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.render_options()?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &contents)
}
