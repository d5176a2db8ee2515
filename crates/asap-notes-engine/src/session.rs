//! # Session
//!
//! One running instance of the app: the loaded settings, the note being
//! edited, the renderer configuration and client liveness. Front ends talk
//! to the notes folder only through a [`Session`].
//!
//! [`Session::heartbeat`], [`Session::should_exit`] and
//! [`Session::request_shutdown`] serve long-running front ends that keep a
//! session open across client requests and poll it every
//! [`CHECK_INTERVAL`](crate::liveness::CHECK_INTERVAL). The one-shot CLI opens a
//! session per command and never polls.

use std::path::{Path, PathBuf};

use asap_notes_config::{ConfigError, Settings, SettingsUpdate};
use log::{debug, info};
use relative_path::{RelativePath, RelativePathBuf};

use crate::io::{self, StorageError};
use crate::liveness::Liveness;
use crate::models::Folder;
use crate::render::{RenderOptions, Renderer};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("No note is open")]
    NoCurrentNote,
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    settings_path: PathBuf,
    renderer: Renderer,
    current_note: Option<RelativePathBuf>,
    liveness: Liveness,
    shutdown_requested: bool,
}

impl Session {
    pub fn new(settings: Settings, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            settings_path: settings_path.into(),
            renderer: Renderer::default(),
            current_note: None,
            liveness: Liveness::default(),
            shutdown_requested: false,
        }
    }

    /// Loads settings from `settings_path`, writing defaults if the file is missing.
    pub fn open(settings_path: impl Into<PathBuf>) -> Result<Self> {
        let settings_path = settings_path.into();
        let settings = Settings::load_or_default_from_path(&settings_path)?;
        info!("Notes folder: {}", settings.notes_folder.display());
        Ok(Self::new(settings, settings_path))
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.renderer = Renderer::with_options(options);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn notes_root(&self) -> &Path {
        &self.settings.notes_folder
    }

    /// Merges `update` into the settings and saves them if anything changed.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<&Settings> {
        if self.settings.apply(update)? {
            self.settings.save_to_path(&self.settings_path)?;
            info!("Settings updated");
        }
        Ok(&self.settings)
    }

    pub fn folder_tree(&self) -> Result<Folder> {
        Ok(io::build_folder_tree(self.notes_root())?)
    }

    pub fn read_note(&self, path: &str) -> Result<String> {
        let path = io::resolve_note_path(path)?;
        Ok(io::read_note(self.notes_root(), &path)?)
    }

    /// Reads a note and makes it the current one.
    pub fn open_note(&mut self, path: &str) -> Result<String> {
        let path = io::resolve_note_path(path)?;
        let content = io::read_note(self.notes_root(), &path)?;
        debug!("Opened {path}");
        self.current_note = Some(path);
        Ok(content)
    }

    pub fn current_note(&self) -> Option<&RelativePath> {
        self.current_note.as_deref()
    }

    pub fn save_note(&mut self, path: &str, content: &str) -> Result<RelativePathBuf> {
        let path = io::resolve_note_path(path)?;
        io::write_note(self.notes_root(), &path, content)?;
        Ok(path)
    }

    /// Saves `content` over the current note.
    pub fn save_current(&mut self, content: &str) -> Result<()> {
        let path = self.current_note.as_ref().ok_or(SessionError::NoCurrentNote)?;
        io::write_note(&self.settings.notes_folder, path, content)?;
        Ok(())
    }

    /// Creates an empty note and opens it.
    pub fn create_note(&mut self, folder: &str, name: &str) -> Result<RelativePathBuf> {
        let path = io::create_note(self.notes_root(), folder, name)?;
        self.current_note = Some(path.clone());
        Ok(path)
    }

    pub fn create_folder(&self, parent: &str, name: &str) -> Result<RelativePathBuf> {
        Ok(io::create_folder(self.notes_root(), parent, name)?)
    }

    pub fn search(&self, query: &str) -> Result<Vec<RelativePathBuf>> {
        Ok(io::search_notes(self.notes_root(), query)?)
    }

    pub fn render(&self, content: &str) -> String {
        self.renderer.render(content)
    }

    pub fn render_note(&self, path: &str) -> Result<String> {
        Ok(self.render(&self.read_note(path)?))
    }

    /// Records a client ping.
    pub fn heartbeat(&mut self) {
        self.liveness.ping();
    }

    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    /// True when the client stopped pinging or a shutdown was requested.
    pub fn should_exit(&self) -> bool {
        self.shutdown_requested || self.liveness.is_expired()
    }

    pub fn request_shutdown(&mut self) {
        info!("Shutdown requested");
        self.shutdown_requested = true;
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }
}
