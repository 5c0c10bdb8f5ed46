//! Error type shared by the matting library and both tools.
use std::path::PathBuf;

/// Every failure the pipeline, the batch driver, or the tools can report.
#[derive(Debug, thiserror::Error)]
pub enum MatteError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} has {channels} channel(s); at least 3 are required", path.display())]
    Channels { path: PathBuf, channels: u8 },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("raster size mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    Dimensions {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("raw buffer of {len} bytes does not describe a {width}x{height} RGBA raster")]
    InvalidRaster {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("crop [{top}..{bottom}) x [{left}..{right}) is outside a {width}x{height} raster")]
    CropOutOfBounds {
        top: usize,
        bottom: usize,
        left: usize,
        right: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),

    #[error("failed to serialize JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MatteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures that mean "this file is not a usable image".
    ///
    /// The batch driver skips such files instead of counting them as failed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Channels { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatteError>;
