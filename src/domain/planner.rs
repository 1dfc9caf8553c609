use super::{order, FileRecord, SortKey};
use crate::error::{RenumError, Result};
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Default number of digits for the sequence number
pub const DEFAULT_WIDTH: usize = 3;

/// Widest zero padding a scheme accepts
pub const MAX_WIDTH: usize = 9;

/// How the sequence number is rendered into a target name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingScheme {
    /// Minimum digit count; numbers are zero-padded up to it
    pub width: usize,
}

impl NumberingScheme {
    /// Builds a scheme with `width` clamped to `1..=MAX_WIDTH`
    pub fn new(width: usize) -> Self {
        Self {
            width: width.clamp(1, MAX_WIDTH),
        }
    }

    pub fn format(&self, index: usize) -> String {
        format_index(index, self.width)
    }
}

impl Default for NumberingScheme {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Zero-pads `index` to `width` digits.
///
/// A number with more digits than `width` is written out in full, so 1000
/// at width 3 is "1000" and never truncated to "000".
pub fn format_index(index: usize, width: usize) -> String {
    let digits = index.to_string();
    if digits.len() >= width {
        return digits;
    }
    let mut padded = "0".repeat(width - digits.len());
    padded.push_str(&digits);
    padded
}

/// One planned rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlanEntry {
    pub source: FileRecord,
    pub target: String,
}

impl RenamePlanEntry {
    /// Full path the source will be renamed to, in the same directory
    pub fn target_path(&self) -> PathBuf {
        match self.source.path.parent() {
            Some(parent) => parent.join(&self.target),
            None => PathBuf::from(&self.target),
        }
    }

    /// True when the file already carries its planned name
    pub fn is_identity(&self) -> bool {
        self.source.path.file_name() == Some(OsStr::new(&self.target))
    }
}

/// A validated, ordered batch of renames for one folder.
///
/// Only [`plan`] builds these, so a value in hand has already passed the
/// collision checks and holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    folder: PathBuf,
    entries: Vec<RenamePlanEntry>,
}

impl RenamePlan {
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn entries(&self) -> &[RenamePlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenamePlanEntry> {
        self.entries.iter()
    }

    /// Number of entries that actually change a name
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_identity()).count()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenamePlanEntry;
    type IntoIter = std::slice::Iter<'a, RenamePlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Assigns `prefix + number + extension` to each record in the given order.
///
/// # Errors
/// * `EmptyInput` - `ordered` is empty
/// * `InvalidPrefix` - the prefix would escape the folder
/// * `RenameCollision` - two entries share a target, or a target is the
///   current name of another file that is being renamed away
pub fn plan(ordered: &[FileRecord], prefix: &str, scheme: &NumberingScheme) -> Result<RenamePlan> {
    if ordered.is_empty() {
        return Err(RenumError::EmptyInput);
    }
    validate_prefix(prefix)?;

    let entries: Vec<RenamePlanEntry> = ordered
        .iter()
        .enumerate()
        .map(|(i, record)| RenamePlanEntry {
            target: format!(
                "{}{}{}",
                prefix,
                scheme.format(i + 1),
                record.extension.as_deref().unwrap_or("")
            ),
            source: record.clone(),
        })
        .collect();

    check_collisions(&entries)?;

    let folder = ordered[0]
        .path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    tracing::debug!(
        "Planned {} renames in {} with prefix {:?}",
        entries.len(),
        folder.display(),
        prefix
    );

    Ok(RenamePlan { folder, entries })
}

/// Orders `files` by `key` and plans their renames
pub fn build_plan(
    files: &[FileRecord],
    key: SortKey,
    prefix: &str,
    scheme: &NumberingScheme,
) -> Result<RenamePlan> {
    plan(&order(files, key), prefix, scheme)
}

/// Rejects prefixes that would turn a target name into a path
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.contains(['/', '\\', '\0']) {
        return Err(RenumError::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}

// Targets must be pairwise distinct and must not name another file that
// is still being renamed away.
fn check_collisions(entries: &[RenamePlanEntry]) -> Result<()> {
    let mut claimed: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Some(first) = claimed.insert(&entry.target, &entry.source.name) {
            return Err(collision(&entry.target, first, &entry.source.name));
        }
    }

    let renamed_away: HashSet<&str> = entries
        .iter()
        .filter(|e| !e.is_identity())
        .map(|e| e.source.name.as_str())
        .collect();
    for entry in entries {
        if entry.is_identity() {
            continue;
        }
        if renamed_away.contains(entry.target.as_str()) {
            return Err(collision(&entry.target, &entry.target, &entry.source.name));
        }
    }

    Ok(())
}

fn collision(target: &str, first: &str, second: &str) -> RenumError {
    tracing::error!(
        "Rename plan collision on {:?} between {:?} and {:?}",
        target,
        first,
        second
    );
    RenumError::RenameCollision {
        target: target.to_string(),
        first: first.to_string(),
        second: second.to_string(),
    }
}
