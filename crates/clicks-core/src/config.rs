use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ClickError, Result};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "clicks.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClicksConfig {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Knobs for the click-distance solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Give up once this many clicks have been tried without covering the
    /// target set. `None` means no cap.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Preferred output mode: `pretty`, `text` or `json`.
    #[serde(default)]
    pub format: Option<String>,
}

impl ClicksConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ClickError::InvalidInput`] if the document does not parse or
    /// holds an invalid value.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ClickError::InvalidInput(format!("config parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.solver.max_depth == Some(0) {
            return Err(ClickError::InvalidInput(
                "solver.max_depth must be at least 1".to_string(),
            ));
        }
        if let Some(format) = &self.output.format {
            if !matches!(format.as_str(), "pretty" | "text" | "json") {
                return Err(ClickError::InvalidInput(format!(
                    "output.format must be pretty, text or json (got `{format}`)"
                )));
            }
        }
        Ok(())
    }
}

/// Load configuration from `explicit` if given, otherwise from
/// `<dir>/clicks.toml` when that file exists, otherwise defaults.
///
/// # Errors
///
/// Returns [`ClickError::Io`] if an existing file cannot be read and
/// [`ClickError::InvalidInput`] if it does not parse. An explicit path that
/// does not exist is an I/O error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ClicksConfig> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(ClicksConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| ClickError::Io(format!("failed to read {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "loaded config");
    ClicksConfig::from_toml(&content)
}
