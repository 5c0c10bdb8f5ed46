use crate::error::{MatteError, Result};
use crate::matte::MatteOptions;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the batch driver needs to run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory whose immediate subdirectories hold the sprite PNGs.
    pub input_root: PathBuf,
    /// Mirrored output tree; skipped during the scan if inside `input_root`.
    pub output_root: PathBuf,
    /// Matting thresholds, under a `"matte"` object in JSON.
    pub matte: MatteOptions,
    /// Worker threads; `None` uses all available cores.
    pub workers: Option<usize>,
    /// Optional JSON run report.
    pub report: Option<PathBuf>,
    /// Optional directory for per-image intermediate rasters.
    pub debug_dir: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_root: PathBuf::from("outputs"),
            matte: MatteOptions::default(),
            workers: None,
            report: None,
            debug_dir: None,
        }
    }
}

/// Matte every sprite PNG under the input root into a mirrored output tree.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sprite-matte", version, about, long_about = None)]
pub struct BatchCli {
    /// JSON config file; command-line flags override its values
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory containing one subdirectory per character (default: .)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub input_root: Option<PathBuf>,

    /// Output tree root (default: outputs)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output_root: Option<PathBuf>,

    /// Original alpha must exceed this to stay opaque (default: 128)
    #[arg(long)]
    pub premask_threshold: Option<u8>,

    /// r, g and b must all exceed this for a pixel to count as canvas (default: 127)
    #[arg(long)]
    pub brightness_threshold: Option<u8>,

    /// Number of worker threads (default: available cores)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Write a JSON report of the run to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub report: Option<PathBuf>,

    /// Write per-image intermediate rasters under this directory
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub debug_dir: Option<PathBuf>,
}

impl BatchCli {
    /// Resolve the final config: defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => BatchConfig::default(),
        };
        if let Some(v) = self.input_root {
            config.input_root = v;
        }
        if let Some(v) = self.output_root {
            config.output_root = v;
        }
        if let Some(v) = self.premask_threshold {
            config.matte.premask_threshold = v;
        }
        if let Some(v) = self.brightness_threshold {
            config.matte.brightness_threshold = v;
        }
        if let Some(v) = self.jobs {
            config.workers = Some(v);
        }
        if self.report.is_some() {
            config.report = self.report;
        }
        if self.debug_dir.is_some() {
            config.debug_dir = self.debug_dir;
        }
        config.matte.keep_intermediates = config.debug_dir.is_some();
        validate(&config)?;
        Ok(config)
    }
}

/// Parse the process arguments into a [`BatchConfig`].
pub fn parse_cli() -> Result<BatchConfig> {
    BatchCli::parse().into_config()
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let contents = fs::read_to_string(path).map_err(|e| MatteError::io(path, e))?;
    serde_json::from_str(&contents)
        .map_err(|e| MatteError::Config(format!("failed to parse {}: {e}", path.display())))
}

fn validate(config: &BatchConfig) -> Result<()> {
    if config.workers == Some(0) {
        return Err(MatteError::Config("workers must be at least 1".to_string()));
    }
    if config.output_root.as_os_str().is_empty() {
        return Err(MatteError::Config("output root must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_working_directory_layout() {
        let config = BatchCli::default().into_config().unwrap();
        assert_eq!(config.input_root, PathBuf::from("."));
        assert_eq!(config.output_root, PathBuf::from("outputs"));
        assert_eq!(config.matte.premask_threshold, 128);
        assert_eq!(config.matte.brightness_threshold, 127);
        assert!(!config.matte.keep_intermediates);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matte.json");
        fs::write(
            &path,
            r#"{ "input_root": "sprites", "matte": { "premask_threshold": 200 }, "workers": 2 }"#,
        )
        .unwrap();

        let cli = BatchCli::parse_from([
            "sprite-matte",
            "--config",
            path.to_str().unwrap(),
            "--jobs",
            "4",
            "--debug-dir",
            "dbg",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.input_root, PathBuf::from("sprites"));
        assert_eq!(config.output_root, PathBuf::from("outputs"));
        assert_eq!(config.matte.premask_threshold, 200);
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.debug_dir, Some(PathBuf::from("dbg")));
        assert!(config.matte.keep_intermediates);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "inputs": "typo" }"#).unwrap();
        assert!(matches!(load_config(&path), Err(MatteError::Config(_))));
    }

    #[test]
    fn zero_workers_is_invalid() {
        let cli = BatchCli::parse_from(["sprite-matte", "-j", "0"]);
        assert!(matches!(cli.into_config(), Err(MatteError::Config(_))));
    }
}
