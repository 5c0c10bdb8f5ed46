//! Tool configuration: JSON config files and command-line arguments.
//!
//! - `batch`: [`BatchConfig`] for the `sprite-matte` driver, loadable from JSON
//!   and overridable by [`BatchCli`] flags.
//! - `binarize`: positional arguments of the single-image `binarize` tool.

pub mod batch;
pub mod binarize;

pub use batch::{load_config, parse_cli, BatchCli, BatchConfig};
pub use binarize::BinarizeArgs;
