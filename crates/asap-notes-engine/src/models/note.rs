use std::time::SystemTime;

use relative_path::{RelativePath, RelativePathBuf};

/// File extensions treated as notes.
pub const NOTE_EXTENSIONS: [&str; 2] = ["md", "txt"];

/// Extension appended to a new note name that has none.
pub const DEFAULT_EXTENSION: &str = "md";

/// A note file listed inside a [`Folder`](super::Folder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInfo {
    /// File name including its extension.
    pub name: String,
    /// Path relative to the notes folder.
    pub path: RelativePathBuf,
    pub modified: SystemTime,
}

impl NoteInfo {
    /// The file name without its note extension.
    pub fn display_name(&self) -> &str {
        display_name(&self.name)
    }
}

/// Whether `name` ends in one of the [`NOTE_EXTENSIONS`].
pub fn is_note_file(name: &str) -> bool {
    RelativePath::new(name)
        .extension()
        .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
}

/// Strips a note extension from a file name, falling back to the name itself.
pub fn display_name(name: &str) -> &str {
    NOTE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext)?.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name)
}

/// Cleans a user-supplied note name.
///
/// A name without any `.` gets `.md` appended. The result must end in `.md`
/// or `.txt`, only `[A-Za-z0-9 _-.]` is kept, and surrounding whitespace is
/// trimmed. Returns `None` when nothing usable is left.
pub fn sanitize_note_name(raw: &str) -> Option<String> {
    let mut name = raw.trim().to_string();
    if name.is_empty() {
        return None;
    }
    if !name.contains('.') {
        name.push('.');
        name.push_str(DEFAULT_EXTENSION);
    }
    if !is_note_file(&name) {
        return None;
    }

    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.'))
        .collect();
    let cleaned = cleaned.trim();

    if display_name(cleaned) == cleaned || cleaned.starts_with('.') {
        return None;
    }
    Some(cleaned.to_string())
}
