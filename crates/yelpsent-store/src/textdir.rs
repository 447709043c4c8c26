//! Read the `.txt` files of a directory, e.g. the output of a split.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::StoreError;

/// A text file and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Read every regular `.txt` file directly inside `dir`, sorted by name.
///
/// Subdirectories and files with other extensions are ignored.
pub fn read_text_dir(dir: &Path) -> Result<Vec<TextFile>, StoreError> {
    let read_dir_err = |source| StoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        if !name.ends_with(".txt") || !path.is_file() {
            continue;
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;
        files.push(TextFile {
            name,
            path,
            content,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = %dir.display(), count = files.len(), "read text directory");
    Ok(files)
}
