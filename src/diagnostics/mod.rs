//! Serializable diagnostics describing a conversion.
//!
//! [`ConversionReport`] is returned by `Converter::convert_with_report` and
//! bundles the glyph grid with a [`PipelineTrace`] of what each stage did.

pub mod report;
pub mod timing;

pub use report::{ConversionReport, EdgeStage, InputDescriptor, LuminanceStats, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
