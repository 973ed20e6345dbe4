//! Error types surfaced by option validation, decoding and config loading.
use std::path::PathBuf;
use thiserror::Error;

/// Rejected render options. Raised before any pipeline stage runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("unknown ramp mode {0:?} (expected one of ASCII, UNICODE, DOTS, RECTANGLES, BARS, LOADING)")]
    UnknownRampMode(String),
    #[error("cell size must be at least 1 pixel, got {0}")]
    CellSize(usize),
    #[error("cell aspect must be a positive finite number, got {0}")]
    CellAspect(f32),
    #[error("edge threshold must lie in [0, 1], got {0}")]
    EdgeThreshold(f32),
    #[error("gaussian sigma must be a positive finite number, got {0}")]
    Sigma(f32),
}

/// Failure of a single conversion request.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid render options: {0}")]
    InvalidOptions(#[from] OptionsError),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failure while loading a runtime configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid render options in config: {0}")]
    Options(#[from] OptionsError),
}
