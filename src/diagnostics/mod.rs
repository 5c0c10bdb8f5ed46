//! Run diagnostics: per-stage timings and the serializable batch report.

pub mod report;
pub mod timing;

pub use report::{BatchReport, ImageReport, ImageStatus};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
