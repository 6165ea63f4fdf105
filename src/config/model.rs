//! Config struct definition and default implementation.

use crate::report::ColorTheme;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".flake8-diff.yaml";

/// File-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Force a VCS backend by name (`git`, `hg`) instead of probing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<String>,

    /// Extra flags passed through to the linter, split on whitespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flake8_options: Option<String>,

    /// Print violations in the linter's own one-line format.
    #[serde(default)]
    pub standard_flake8_output: bool,

    /// Color theme for the report.
    #[serde(default)]
    pub color_theme: ColorTheme,

    /// Linter command line (default: "flake8").
    #[serde(default = "default_linter")]
    pub linter: String,

    /// Globs selecting which changed files are linted.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Revisions the working tree is compared against.
    #[serde(default = "default_commits")]
    pub commits: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vcs: None,
            flake8_options: None,
            standard_flake8_output: false,
            color_theme: ColorTheme::default(),
            linter: default_linter(),
            include: default_include(),
            commits: default_commits(),
        }
    }
}

pub(crate) fn default_linter() -> String {
    "flake8".to_string()
}

pub(crate) fn default_include() -> Vec<String> {
    vec!["*.py".to_string()]
}

pub(crate) fn default_commits() -> Vec<String> {
    vec!["master".to_string()]
}
