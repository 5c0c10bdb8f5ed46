use crate::matte::BINARIZE_THRESHOLD;
use clap::Parser;
use std::path::PathBuf;

/// Binarize the alpha channel of a single image.
///
/// Pixels whose alpha is strictly greater than THRESHOLD become fully opaque,
/// all others fully transparent. Color channels are left as they are.
#[derive(Parser, Debug, Clone)]
#[command(name = "binarize", version, about, long_about = None)]
pub struct BinarizeArgs {
    /// Image to read (any format the build supports)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the result; the extension selects the encoder
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Alpha cutoff, 0-255
    #[arg(default_value_t = BINARIZE_THRESHOLD)]
    pub threshold: u8,
}
