use super::scan::ImageJob;
use crate::config::BatchConfig;
use crate::diagnostics::{ImageReport, ImageStatus, TimingBreakdown};
use crate::error::MatteError;
use crate::image::io::{load_rgba_image, save_rgba_png};
use crate::matte::{matte_sprite, MatteIntermediates};
use log::{error, info, warn};
use std::path::Path;

/// Load, matte and write one image. Never fails: the outcome is in the report.
pub fn process_image(job: &ImageJob, config: &BatchConfig) -> ImageReport {
    let output = job.output_in(&config.output_root);
    let mut timing = TimingBreakdown::default();
    let mut report = ImageReport {
        input: job.input.clone(),
        output: output.clone(),
        status: ImageStatus::Written,
        source_size: None,
        bbox: None,
        flood: None,
        timing: TimingBreakdown::default(),
    };

    let source = match timing.time("load", || load_rgba_image(&job.input)) {
        Ok(image) => image,
        Err(err) => {
            report.status = load_failure(&job.input, &err);
            report.timing = timing;
            return report;
        }
    };

    let outcome = match matte_sprite(source, &config.matte) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("matting {} failed: {err}", job.input.display());
            report.status = ImageStatus::Failed {
                reason: err.to_string(),
            };
            report.timing = timing;
            return report;
        }
    };
    report.source_size = Some([outcome.source_width, outcome.source_height]);
    report.bbox = Some(outcome.bbox);
    report.flood = Some(outcome.flood);
    timing.extend(outcome.timing);

    if let (Some(dir), Some(inter)) = (&config.debug_dir, &outcome.intermediates) {
        write_intermediates(&dir.join(&job.relative), inter);
    }

    match timing.time("write", || save_rgba_png(&outcome.image, &output)) {
        Ok(()) => info!(
            "{} -> {} ({}x{} -> {}x{})",
            job.input.display(),
            output.display(),
            outcome.source_width,
            outcome.source_height,
            outcome.image.w,
            outcome.image.h
        ),
        Err(err) => {
            error!("writing {} failed: {err}", output.display());
            report.status = ImageStatus::Failed {
                reason: err.to_string(),
            };
        }
    }
    report.timing = timing;
    report
}

/// Decode problems skip the file; anything else while loading is a failure.
fn load_failure(input: &Path, err: &MatteError) -> ImageStatus {
    let reason = err.to_string();
    if err.is_decode() {
        warn!("skipping {}: {reason}", input.display());
        ImageStatus::Skipped { reason }
    } else {
        error!("loading {} failed: {reason}", input.display());
        ImageStatus::Failed { reason }
    }
}

/// `stem_path` is `<debug_dir>/<subdir>/<file name>`; rasters land next to it.
fn write_intermediates(stem_path: &Path, inter: &MatteIntermediates) {
    let stem = stem_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = stem_path.parent().unwrap_or(stem_path);
    for (suffix, raster) in [("premask", &inter.premask), ("flood", &inter.flood)] {
        let path = dir.join(format!("{stem}_{suffix}.png"));
        if let Err(err) = save_rgba_png(raster, &path) {
            warn!("debug raster {} not written: {err}", path.display());
        }
    }
}
