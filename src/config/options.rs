//! Resolved options for one run.

use super::model::Config;
use crate::logging::Verbosity;
use crate::report::ColorTheme;

/// Everything the diff engine needs to know, fixed for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub vcs: Option<String>,
    pub flake8_options: Option<String>,
    pub standard_flake8_output: bool,
    pub color_theme: ColorTheme,
    pub linter: String,
    pub include: Vec<String>,
    pub commits: Vec<String>,
    pub verbosity: Verbosity,
}

impl RunOptions {
    pub fn new(config: Config, verbosity: Verbosity) -> Self {
        Self {
            vcs: config.vcs,
            flake8_options: config.flake8_options,
            standard_flake8_output: config.standard_flake8_output,
            color_theme: config.color_theme,
            linter: config.linter,
            include: config.include,
            commits: config.commits,
            verbosity,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(Config::default(), Verbosity::default())
    }
}
