use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Notes folder used when no settings file exists yet.
pub const DEFAULT_NOTES_FOLDER: &str = "~/Documents/ASAPNotes";
pub const DEFAULT_FONT_FAMILY: &str = "monospace";
pub const DEFAULT_FONT_SIZE: &str = "16";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),

    #[error("Failed to create notes folder {path}: {source}")]
    CreateNotesFolder {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// User settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub notes_folder: PathBuf,
    pub font_family: String,
    pub font_size: String,
}

impl Default for Settings {
    fn default() -> Self {
        let notes_folder = PathBuf::from(DEFAULT_NOTES_FOLDER);
        Self {
            notes_folder: expand_path(&notes_folder).unwrap_or(notes_folder),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
        }
    }
}

/// A partial settings change. Empty or missing fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub notes_folder: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        [&self.notes_folder, &self.font_family, &self.font_size]
            .iter()
            .all(|field| non_empty(field).is_none())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Settings {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the notes folder
        settings.notes_folder =
            expand_path(&settings.notes_folder).unwrap_or(settings.notes_folder);

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads settings, writing defaults first if the file does not exist.
    ///
    /// The notes folder is created when missing.
    pub fn load_or_default_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let settings = match Self::load_from_path(config_path)? {
            Some(settings) => settings,
            None => {
                log::info!("No settings at {}, writing defaults", config_path.display());
                let settings = Self::default();
                settings.save_to_path(config_path)?;
                settings
            }
        };
        settings.ensure_notes_folder()?;
        Ok(settings)
    }

    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)?;
        log::debug!("Saved settings to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    /// Applies the non-empty fields of `update`. Returns whether anything changed.
    ///
    /// A new notes folder is expanded and created.
    pub fn apply(&mut self, update: &SettingsUpdate) -> Result<bool, ConfigError> {
        let mut changed = false;

        if let Some(folder) = non_empty(&update.notes_folder) {
            let folder = PathBuf::from(folder);
            let folder = expand_path(&folder).unwrap_or(folder);
            if folder != self.notes_folder {
                self.notes_folder = folder;
                self.ensure_notes_folder()?;
                changed = true;
            }
        }
        if let Some(family) = non_empty(&update.font_family) {
            changed |= family != self.font_family;
            self.font_family = family.to_string();
        }
        if let Some(size) = non_empty(&update.font_size) {
            changed |= size != self.font_size;
            self.font_size = size.to_string();
        }

        Ok(changed)
    }

    /// Creates the notes folder if it does not exist yet.
    pub fn ensure_notes_folder(&self) -> Result<(), ConfigError> {
        if self.notes_folder.is_dir() {
            return Ok(());
        }
        log::info!("Creating notes folder {}", self.notes_folder.display());
        std::fs::create_dir_all(&self.notes_folder).map_err(|source| {
            ConfigError::CreateNotesFolder {
                path: self.notes_folder.clone(),
                source,
            }
        })
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/asap-notes");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

fn expand_path(path: &Path) -> Option<PathBuf> {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
        Err(_) => None,
    }
}
