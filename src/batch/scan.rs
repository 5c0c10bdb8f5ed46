//! Enumerate `<root>/<subdir>/*.png` into independent jobs.
use crate::error::{MatteError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// One input file and its location relative to the input root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageJob {
    pub input: PathBuf,
    /// `<subdir>/<file name>`, mirrored under the output root.
    pub relative: PathBuf,
}

impl ImageJob {
    pub fn output_in(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScanResult {
    /// Subdirectories that were listed successfully.
    pub directories: usize,
    pub jobs: Vec<ImageJob>,
}

/// List the PNG files one level below `input_root`.
///
/// Subdirectories and files are visited in name order. `exclude` (normally the
/// output root) is skipped when it is one of the subdirectories. Failure to
/// list `input_root` itself is an error; an unreadable subdirectory is logged
/// and skipped.
pub fn scan_tree(input_root: &Path, exclude: Option<&Path>) -> Result<ScanResult> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let mut dirs = sorted_entries(input_root).map_err(|e| MatteError::io(input_root, e))?;
    dirs.retain(|path| path.is_dir());

    let mut result = ScanResult::default();
    for dir in dirs {
        if excluded.is_some() && dir.canonicalize().ok() == excluded {
            debug!("scan: skipping output directory {}", dir.display());
            continue;
        }
        let Some(group) = dir.file_name().map(PathBuf::from) else {
            continue;
        };
        let files = match sorted_entries(&dir) {
            Ok(files) => files,
            Err(err) => {
                warn!("scan: cannot list {}: {err}", dir.display());
                continue;
            }
        };
        result.directories += 1;
        for file in files.into_iter().filter(|p| p.is_file() && is_png(p)) {
            if let Some(name) = file.file_name() {
                let relative = group.join(name);
                result.jobs.push(ImageJob {
                    input: file,
                    relative,
                });
            }
        }
    }
    debug!(
        "scan {}: {} director(ies), {} image(s)",
        input_root.display(),
        result.directories,
        result.jobs.len()
    );
    Ok(result)
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(err) => warn!("scan: unreadable entry in {}: {err}", dir.display()),
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
