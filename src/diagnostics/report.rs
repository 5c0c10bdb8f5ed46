use super::TimingBreakdown;
use crate::matte::FloodStats;
use crate::types::BoundingBox;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one input file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ImageStatus {
    Written,
    /// The file could not be decoded; the batch moved on.
    Skipped { reason: String },
    /// Processing or writing failed after a successful decode.
    Failed { reason: String },
}

/// Per-image entry of a [`BatchReport`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: ImageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_size: Option<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flood: Option<FloodStats>,
    pub timing: TimingBreakdown,
}

impl ImageReport {
    pub fn is_written(&self) -> bool {
        self.status == ImageStatus::Written
    }
}

/// Summary of one batch run, entries in scan order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub directories: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total_ms: f64,
    pub images: Vec<ImageReport>,
}

impl BatchReport {
    pub fn new(
        input_root: PathBuf,
        output_root: PathBuf,
        directories: usize,
        images: Vec<ImageReport>,
        total_ms: f64,
    ) -> Self {
        let mut report = Self {
            input_root,
            output_root,
            directories,
            written: 0,
            skipped: 0,
            failed: 0,
            total_ms,
            images: Vec::new(),
        };
        for image in &images {
            match image.status {
                ImageStatus::Written => report.written += 1,
                ImageStatus::Skipped { .. } => report.skipped += 1,
                ImageStatus::Failed { .. } => report.failed += 1,
            }
        }
        report.images = images;
        report
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Processed {} image(s) in {} director{}: written={} skipped={} failed={} ({:.1} ms)",
            self.images.len(),
            self.directories,
            if self.directories == 1 { "y" } else { "ies" },
            self.written,
            self.skipped,
            self.failed,
            self.total_ms
        )
    }
}
