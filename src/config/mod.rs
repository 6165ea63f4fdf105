//! Configuration for flake8-diff.
//!
//! Defaults for the run options can live in `.flake8-diff.yaml` in the working
//! directory (or a file named with `--config`). Unknown keys are ignored for
//! forward compatibility; command-line flags override file values.

mod model;
mod operations;
mod options;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
pub use options::RunOptions;
