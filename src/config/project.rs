use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigData, CONFIG_FILE_NAME};
use crate::error::{ConfigError, ErrorContext, ExamPatchResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    /// Loads `exampatch.toml` from `root`, falling back to the built-in defaults.
    pub fn load_or_default(root: impl AsRef<Path>) -> ExamPatchResult<Self> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load(config_path)
        } else {
            Ok(Self {
                data: ConfigData::default(),
                path: config_path,
            })
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> ExamPatchResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let data: ConfigData = toml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.clone(),
            message: e.message().to_string(),
        })?;

        let config = Self { data, path };
        config.validate()?;
        Ok(config)
    }

    /// Writes a default config into `root` unless one exists. Returns its path.
    pub fn init(root: impl AsRef<Path>) -> ExamPatchResult<PathBuf> {
        let config_path = root.as_ref().join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            Self {
                data: ConfigData::default(),
                path: config_path.clone(),
            }
            .save()?;
        }
        Ok(config_path)
    }

    pub fn save(&self) -> ExamPatchResult<()> {
        let content = toml::to_string_pretty(&self.data).map_err(|e| ConfigError::Invalid {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }

    /// Asset paths end up inside quoted attributes, so they must be non-empty
    /// and free of quotes and angle brackets.
    fn validate(&self) -> ExamPatchResult<()> {
        let assets = &self.data.assets;
        for (field, value) in [
            ("assets.stylesheet", &assets.stylesheet),
            ("assets.script", &assets.script),
        ] {
            if value.trim().is_empty() || value.contains(['"', '\'', '<', '>']) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_FILE_NAME),
        }
    }
}
