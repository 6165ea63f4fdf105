//! Config loading and validation.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{LintDiffError, Result};
use crate::vcs::IncludeFilter;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LintDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LintDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find and load the config for a run.
    ///
    /// An explicit path must exist. Otherwise `.flake8-diff.yaml` in `cwd` is
    /// used when present, and the defaults when not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("loading config from {}", candidate.display());
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LintDiffError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LintDiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `linter` must not be blank
    /// - `commits` must name at least one revision
    /// - `include` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.linter.trim().is_empty() {
            return Err(LintDiffError::UserError(
                "config validation failed: linter must not be empty".to_string(),
            ));
        }

        if self.commits.iter().all(|c| c.trim().is_empty()) {
            return Err(LintDiffError::UserError(
                "config validation failed: commits must name at least one revision".to_string(),
            ));
        }

        IncludeFilter::new(&self.include).map_err(|e| {
            LintDiffError::UserError(format!("config validation failed: {}", e))
        })?;

        Ok(())
    }
}
