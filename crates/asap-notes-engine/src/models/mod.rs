pub mod folder;
pub mod note;

pub use folder::{Folder, FolderItem, ROOT_FOLDER_NAME, sanitize_folder_name};
pub use note::{NOTE_EXTENSIONS, NoteInfo, display_name, is_note_file, sanitize_note_name};
