use relative_path::RelativePathBuf;

use super::note::NoteInfo;

/// Name given to the notes folder itself in a folder tree.
pub const ROOT_FOLDER_NAME: &str = "Root";

/// A folder in the notes tree.
///
/// The root folder is named [`ROOT_FOLDER_NAME`] and has an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    /// Path relative to the notes folder.
    pub path: RelativePathBuf,
    /// Notes directly in this folder, most recently modified first.
    pub notes: Vec<NoteInfo>,
    /// Child folders, sorted by name.
    pub subfolders: Vec<Folder>,
}

impl Folder {
    pub fn new(name: impl Into<String>, path: RelativePathBuf) -> Self {
        Self {
            name: name.into(),
            path,
            notes: Vec::new(),
            subfolders: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_FOLDER_NAME, RelativePathBuf::new())
    }

    pub fn is_root(&self) -> bool {
        self.path.as_str().is_empty()
    }

    /// Total number of notes in this folder and every folder below it.
    pub fn note_count(&self) -> usize {
        self.notes.len() + self.subfolders.iter().map(Folder::note_count).sum::<usize>()
    }

    /// Depth-first listing: each folder, then its notes, then its subfolders.
    pub fn items(&self) -> Vec<FolderItem<'_>> {
        let mut items = Vec::new();
        self.collect_items(0, &mut items);
        items
    }

    fn collect_items<'a>(&'a self, depth: usize, items: &mut Vec<FolderItem<'a>>) {
        items.push(FolderItem::Folder {
            folder: self,
            depth,
        });
        for note in &self.notes {
            items.push(FolderItem::Note {
                note,
                depth: depth + 1,
            });
        }
        for sub in &self.subfolders {
            sub.collect_items(depth + 1, items);
        }
    }
}

/// One row of a flattened [`Folder`] listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderItem<'a> {
    Folder { folder: &'a Folder, depth: usize },
    Note { note: &'a NoteInfo, depth: usize },
}

impl FolderItem<'_> {
    pub fn depth(&self) -> usize {
        match self {
            FolderItem::Folder { depth, .. } | FolderItem::Note { depth, .. } => *depth,
        }
    }
}

/// Cleans a user-supplied folder name, keeping only `[A-Za-z0-9 _-]`.
///
/// Returns `None` when nothing usable is left.
pub fn sanitize_folder_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn note(path: &str) -> NoteInfo {
        let path = RelativePathBuf::from(path);
        NoteInfo {
            name: path.file_name().unwrap_or_default().to_string(),
            path,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn root_folder() {
        let root = Folder::root();
        assert_eq!(root.name, "Root");
        assert!(root.is_root());
        assert_eq!(root.note_count(), 0);
    }

    #[test]
    fn items_are_depth_first() {
        let mut projects = Folder::new("projects", RelativePathBuf::from("projects"));
        projects.notes.push(note("projects/plan.md"));
        let mut root = Folder::root();
        root.notes.push(note("inbox.md"));
        root.subfolders.push(projects);

        let rows: Vec<(String, usize)> = root
            .items()
            .iter()
            .map(|item| match item {
                FolderItem::Folder { folder, depth } => (folder.name.clone(), *depth),
                FolderItem::Note { note, depth } => (note.name.clone(), *depth),
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Root".to_string(), 0),
                ("inbox.md".to_string(), 1),
                ("projects".to_string(), 1),
                ("plan.md".to_string(), 2),
            ]
        );
        assert_eq!(root.note_count(), 2);
    }

    #[test]
    fn sanitizes_folder_names() {
        assert_eq!(sanitize_folder_name(" Work/2024 "), Some("Work2024".to_string()));
        assert_eq!(sanitize_folder_name("a.b"), Some("ab".to_string()));
        assert_eq!(sanitize_folder_name("../"), None);
        assert_eq!(sanitize_folder_name(""), None);
    }
}
