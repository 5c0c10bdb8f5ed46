//! Batch driver: matte every `<input_root>/<subdir>/*.png` into
//! `<output_root>/<subdir>/<file name>`.
//!
//! Images are independent, so with the `parallel` feature each one is a job on
//! a rayon pool (sized by `workers`, default all cores); without it they run
//! in scan order on the calling thread. Either way the report lists images in
//! scan order. A file that cannot be decoded is skipped, a file that cannot be
//! written is marked failed; neither stops the batch, and nothing is retried.

pub mod job;
pub mod scan;

pub use job::process_image;
pub use scan::{scan_tree, ImageJob, ScanResult};

use crate::config::BatchConfig;
use crate::diagnostics::{elapsed_ms, BatchReport, ImageReport};
use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::error::MatteError;
use log::info;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run the whole batch described by `config`.
///
/// Errors only for run-level problems (unreadable input root, pool creation);
/// per-image problems are recorded in the returned report.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let start = Instant::now();
    let scan = scan_tree(&config.input_root, Some(&config.output_root))?;
    info!(
        "matting {} image(s) from {} into {}",
        scan.jobs.len(),
        config.input_root.display(),
        config.output_root.display()
    );

    let images = process_all(&scan.jobs, config)?;
    let report = BatchReport::new(
        config.input_root.clone(),
        config.output_root.clone(),
        scan.directories,
        images,
        elapsed_ms(start),
    );
    info!("{}", report.summary_line());
    Ok(report)
}

fn process_all(jobs: &[ImageJob], config: &BatchConfig) -> Result<Vec<ImageReport>> {
    #[cfg(feature = "parallel")]
    {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(workers) = config.workers {
            builder = builder.num_threads(workers);
        }
        let pool = builder
            .build()
            .map_err(|e| MatteError::WorkerPool(e.to_string()))?;
        Ok(pool.install(|| {
            jobs.par_iter()
                .map(|job| process_image(job, config))
                .collect()
        }))
    }
    #[cfg(not(feature = "parallel"))]
    {
        if let Some(workers) = config.workers.filter(|&n| n > 1) {
            log::debug!("built without `parallel`; ignoring workers={workers}");
        }
        Ok(jobs.iter().map(|job| process_image(job, config)).collect())
    }
}
