use crate::models::{Folder, NoteInfo, is_note_file, sanitize_folder_name, sanitize_note_name};
use log::{debug, info, warn};
use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Note not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Path is required")]
    EmptyPath,
    #[error("Path must be relative to notes folder: {0}")]
    AbsolutePath(String),
    #[error("Path escapes the notes folder: {0}")]
    OutsideNotesRoot(String),
    #[error("Invalid name: {0:?}")]
    InvalidName(String),
}

/// Checks a user-supplied path and normalises it relative to the notes folder.
///
/// Backslashes are treated as separators. Empty paths, absolute paths and
/// paths that climb out of the notes folder are rejected.
pub fn resolve_note_path(path: &str) -> Result<RelativePathBuf, StorageError> {
    if path.trim().is_empty() {
        return Err(StorageError::EmptyPath);
    }

    let unified = path.replace('\\', "/");
    if unified.starts_with('/') || has_drive_prefix(&unified) {
        return Err(StorageError::AbsolutePath(path.to_string()));
    }

    let normalized = RelativePath::new(&unified).normalize();
    if normalized.components().next() == Some(Component::ParentDir) {
        return Err(StorageError::OutsideNotesRoot(path.to_string()));
    }
    if normalized.as_str().is_empty() {
        return Err(StorageError::EmptyPath);
    }
    Ok(normalized)
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Read a note and return its content
pub fn read_note(notes_root: &Path, relative_path: &RelativePath) -> Result<String, StorageError> {
    let relative_path = resolve_note_path(relative_path.as_str())?;
    let absolute_path = relative_path.to_path(notes_root);
    debug!("Reading note {}", absolute_path.display());

    if !absolute_path.is_file() {
        return Err(StorageError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Write content to a note, replacing what was there
pub fn write_note(
    notes_root: &Path,
    relative_path: &RelativePath,
    content: &str,
) -> Result<(), StorageError> {
    let relative_path = resolve_note_path(relative_path.as_str())?;
    let absolute_path = relative_path.to_path(notes_root);
    debug!(
        "Writing {} bytes to {}",
        content.len(),
        absolute_path.display()
    );

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, content)?;
    Ok(())
}

/// Create an empty note named `name` inside `folder` ("" for the notes folder).
///
/// An existing note with the same name is left as it is.
pub fn create_note(
    notes_root: &Path,
    folder: &str,
    name: &str,
) -> Result<RelativePathBuf, StorageError> {
    let file_name =
        sanitize_note_name(name).ok_or_else(|| StorageError::InvalidName(name.to_string()))?;
    let relative_path = resolve_note_path(RelativePath::new(folder).join(&file_name).as_str())?;

    if relative_path.to_path(notes_root).exists() {
        info!("Note {relative_path} already exists");
        return Ok(relative_path);
    }

    write_note(notes_root, &relative_path, "")?;
    info!("Created note {relative_path}");
    Ok(relative_path)
}

/// Create a folder named `name` inside `parent` ("" for the notes folder).
pub fn create_folder(
    notes_root: &Path,
    parent: &str,
    name: &str,
) -> Result<RelativePathBuf, StorageError> {
    let folder_name =
        sanitize_folder_name(name).ok_or_else(|| StorageError::InvalidName(name.to_string()))?;
    let relative_path = resolve_note_path(RelativePath::new(parent).join(&folder_name).as_str())?;

    fs::create_dir_all(relative_path.to_path(notes_root))?;
    info!("Created folder {relative_path}");
    Ok(relative_path)
}

/// Build the folder tree rooted at the notes directory
pub fn build_folder_tree(notes_root: &Path) -> Result<Folder, StorageError> {
    validate_notes_dir(notes_root)?;
    walk_folder(notes_root, Folder::root())
}

fn walk_folder(dir: &Path, mut folder: Folder) -> Result<Folder, StorageError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = folder.path.join(&name);

        if entry.file_type()?.is_dir() {
            match walk_folder(&entry.path(), Folder::new(name, path)) {
                Ok(sub) => folder.subfolders.push(sub),
                Err(e) => warn!("Skipping folder {}: {e}", entry.path().display()),
            }
        } else if is_note_file(&name) {
            match entry.metadata().and_then(|m| m.modified()) {
                Ok(modified) => folder.notes.push(NoteInfo {
                    name,
                    path,
                    modified,
                }),
                Err(e) => warn!("Skipping note {}: {e}", entry.path().display()),
            }
        }
    }

    folder.notes.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.name.cmp(&b.name))
    });
    folder.subfolders.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(folder)
}

/// Find notes whose content contains `query`, ignoring case.
///
/// Returns paths relative to the notes folder, sorted. Notes that cannot be
/// read as text are skipped.
pub fn search_notes(notes_root: &Path, query: &str) -> Result<Vec<RelativePathBuf>, StorageError> {
    validate_notes_dir(notes_root)?;

    let mut notes = Vec::new();
    scan_directory_recursive(notes_root, RelativePath::new(""), &mut notes)?;

    let needle = query.to_lowercase();
    let mut matches: Vec<RelativePathBuf> = notes
        .into_iter()
        .filter(|note| match fs::read_to_string(note.to_path(notes_root)) {
            Ok(content) => content.to_lowercase().contains(&needle),
            Err(e) => {
                warn!("Skipping {note} during search: {e}");
                false
            }
        })
        .collect();
    matches.sort();
    debug!("Search for {query:?} matched {} notes", matches.len());
    Ok(matches)
}

fn scan_directory_recursive(
    dir: &Path,
    relative: &RelativePath,
    notes: &mut Vec<RelativePathBuf>,
) -> Result<(), StorageError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = relative.join(&name);

        if entry.file_type()?.is_dir() {
            if let Err(e) = scan_directory_recursive(&entry.path(), &path, notes) {
                warn!("Skipping folder {}: {e}", entry.path().display());
            }
        } else if is_note_file(&name) {
            notes.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), StorageError> {
    if !path.exists() || !path.is_dir() {
        return Err(StorageError::InvalidNotesDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
