use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{source::InputFormat, uv::SkinType};

/// User defaults stored on disk.
///
/// Example TOML:
/// ```toml
/// skin_type = 2
/// input_format = "openweather"
/// json = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Fitzpatrick skin type (1-6) used for personalised UV advice.
    pub skin_type: Option<u8>,

    /// Default observation document layout, e.g. "native" or "openweather".
    pub input_format: Option<String>,

    /// Print reports as JSON instead of text.
    #[serde(default)]
    pub json: bool,
}

impl Preferences {
    /// Stored skin type as a validated [`SkinType`], if one is set.
    pub fn skin_type(&self) -> Result<Option<SkinType>> {
        self.skin_type
            .map(|value| {
                SkinType::new(value).map_err(|e| {
                    anyhow!("{e}.\nHint: run `advisor configure` to pick a valid skin type.")
                })
            })
            .transpose()
    }

    pub fn set_skin_type(&mut self, skin_type: Option<SkinType>) {
        self.skin_type = skin_type.map(SkinType::value);
    }

    /// Stored input format, falling back to [`InputFormat::Native`].
    pub fn input_format(&self) -> Result<InputFormat> {
        match self.input_format.as_deref() {
            Some(s) => InputFormat::try_from(s),
            None => Ok(InputFormat::default()),
        }
    }

    pub fn set_input_format(&mut self, format: InputFormat) {
        self.input_format = Some(format.as_str().to_string());
    }

    /// Load preferences from disk, or return defaults if none were saved yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no preferences file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let prefs: Preferences = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "preferences loaded");
        Ok(prefs)
    }

    /// Save preferences to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize preferences to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-advisor", "advisor")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
