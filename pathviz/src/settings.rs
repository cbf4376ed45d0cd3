use std::fs;
use std::path::{Path, PathBuf};

use pathviz_paths::Algorithm;
use serde::{Deserialize, Serialize};

/// Errors from loading or checking [`Settings`].
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Board size limits, the initial algorithm and animation pacing.
///
/// Every key is optional in the TOML file:
///
/// ```toml
/// rows = 50
/// min_rows = 10
/// max_rows = 120
/// resize_step = 10
/// algorithm = "astar"
/// frame_delay_ms = 16
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_min_rows")]
    pub min_rows: i32,
    #[serde(default = "default_max_rows")]
    pub max_rows: i32,
    #[serde(default = "default_resize_step")]
    pub resize_step: i32,
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Pause after each animated frame.
    #[serde(default)]
    pub frame_delay_ms: u64,
}

fn default_rows() -> i32 {
    50
}

fn default_min_rows() -> i32 {
    10
}

fn default_max_rows() -> i32 {
    120
}

fn default_resize_step() -> i32 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            min_rows: default_min_rows(),
            max_rows: default_max_rows(),
            resize_step: default_resize_step(),
            algorithm: Algorithm::default(),
            frame_delay_ms: 0,
        }
    }
}

impl Settings {
    /// Read and validate a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&text)?;
        log::debug!("loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the size limits are consistent and `rows` lies within them.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_rows < 1 {
            return Err(SettingsError::Invalid(format!(
                "min_rows must be at least 1, got {}",
                self.min_rows
            )));
        }
        if self.min_rows > self.max_rows {
            return Err(SettingsError::Invalid(format!(
                "min_rows ({}) exceeds max_rows ({})",
                self.min_rows, self.max_rows
            )));
        }
        if self.resize_step < 1 {
            return Err(SettingsError::Invalid(format!(
                "resize_step must be positive, got {}",
                self.resize_step
            )));
        }
        if !(self.min_rows..=self.max_rows).contains(&self.rows) {
            return Err(SettingsError::Invalid(format!(
                "rows ({}) outside {}..={}",
                self.rows, self.min_rows, self.max_rows
            )));
        }
        Ok(())
    }
}
