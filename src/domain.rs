pub mod executor;
pub mod ordering;
pub mod planner;

pub use executor::{execute_plan, ExecutionReport, RenameFailure};
pub use ordering::{natural_cmp, order};
pub use planner::{build_plan, format_index, plan, NumberingScheme, RenamePlan, RenamePlanEntry};

use crate::error::{RenumError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Snapshot of one file taken when the folder is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Real location on disk, used for every filesystem call
    pub path: PathBuf,
    /// File name for ordering and display. Bytes that are not valid UTF-8
    /// show up as U+FFFD; `path` keeps the original bytes.
    pub name: String,
    /// Extension including the leading dot, e.g. ".txt"
    pub extension: Option<String>,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl FileRecord {
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let modified: DateTime<Utc> = metadata.modified()?.into();
        // Not every filesystem records a birth time
        let created: DateTime<Utc> = metadata
            .created()
            .map(DateTime::<Utc>::from)
            .unwrap_or(modified);

        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Path has no file name: {}", path.display()),
            )
        })?;
        let name = file_name.to_string_lossy().into_owned();
        if file_name.to_str().is_none() {
            tracing::debug!("Non-UTF-8 file name read as {:?}", name);
        }

        Ok(FileRecord {
            path: path.to_path_buf(),
            extension: extension_of(&name),
            name,
            size: metadata.len(),
            modified,
            created,
        })
    }
}

/// Returns the extension of `name` including its leading dot.
///
/// A leading dot does not start an extension (`.env` has none) and a
/// trailing dot yields none (`file.`). Only the last segment counts, so
/// `archive.tar.gz` gives `.gz`.
pub fn extension_of(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    Some(name[dot..].to_string())
}

/// Criterion used to order files before numbering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Natural order over file names
    #[default]
    ByName,
    /// Last modification time, oldest first
    ByModifiedTime,
    /// Creation time, oldest first
    ByCreatedTime,
    /// Byte size, smallest first
    BySize,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::ByName,
        SortKey::ByModifiedTime,
        SortKey::ByCreatedTime,
        SortKey::BySize,
    ];

    /// The key after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            SortKey::ByName => SortKey::ByModifiedTime,
            SortKey::ByModifiedTime => SortKey::ByCreatedTime,
            SortKey::ByCreatedTime => SortKey::BySize,
            SortKey::BySize => SortKey::ByName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::ByName => "Name",
            SortKey::ByModifiedTime => "Modified",
            SortKey::ByCreatedTime => "Created",
            SortKey::BySize => "Size",
        }
    }
}

/// Options for loading a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Include files whose name starts with '.'
    pub include_hidden: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
        }
    }
}

/// Lists the regular files directly inside `folder`.
///
/// # Returns
/// * `Ok(Vec<FileRecord>)` - one record per file, in directory order
/// * `Err(RenumError::FolderAccess)` - the folder is missing, not a directory, or unreadable
///
/// # Behavior
/// - Does not recurse into subdirectories
/// - Follows symlinks when deciding whether an entry is a regular file
/// - Skips entries whose metadata cannot be read
/// - Keeps files whose name is not valid UTF-8 (see [`FileRecord::name`])
pub fn load_files(folder: &Path) -> Result<Vec<FileRecord>> {
    load_files_with_options(folder, &LoadOptions::default())
}

/// Lists the regular files directly inside `folder` using custom options
pub fn load_files_with_options(folder: &Path, options: &LoadOptions) -> Result<Vec<FileRecord>> {
    let folder_access = |source: io::Error| RenumError::FolderAccess {
        path: folder.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(folder).map_err(folder_access)?;
    if !metadata.is_dir() {
        return Err(folder_access(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    let entries = fs::read_dir(folder).map_err(folder_access)?;
    let mut files = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let path = entry.path();

        let is_file = match fs::metadata(&path) {
            Ok(m) => m.is_file(),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };
        if !is_file {
            continue;
        }

        let record = match FileRecord::from_path(&path) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if !options.include_hidden && record.name.starts_with('.') {
            continue;
        }

        files.push(record);
    }

    tracing::info!("Loaded {} files from {}", files.len(), folder.display());
    Ok(files)
}
