use super::{RenamePlan, RenamePlanEntry};
use crate::error::{RenumError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The entry that stopped a batch
#[derive(Debug)]
pub struct RenameFailure {
    /// Zero-based position of the entry in the plan
    pub index: usize,
    pub source: PathBuf,
    pub target: PathBuf,
    pub error: io::Error,
}

/// Outcome of applying a plan
#[derive(Debug)]
pub struct ExecutionReport {
    /// Number of entries in the plan
    pub total: usize,
    /// Entries completed before the first failure (identity entries included)
    pub succeeded: usize,
    pub failure: Option<RenameFailure>,
}

impl ExecutionReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Entries never attempted because an earlier one failed
    pub fn skipped(&self) -> usize {
        match self.failure {
            Some(_) => self.total - self.succeeded - 1,
            None => 0,
        }
    }

    /// Turns a partial failure into `RenameExecution`, or returns the count
    pub fn into_result(self) -> Result<usize> {
        match self.failure {
            None => Ok(self.succeeded),
            Some(failure) => Err(RenumError::RenameExecution {
                index: failure.index,
                from: failure.source,
                to: failure.target,
                succeeded: self.succeeded,
                error: failure.error,
            }),
        }
    }
}

/// Applies every entry of `plan` in order, stopping at the first failure.
///
/// The batch is not transactional: entries before a failure stay renamed
/// and entries after it are not attempted. An existing file or directory
/// at a target path is never overwritten; that step fails with
/// `AlreadyExists` instead.
pub fn execute_plan(plan: &RenamePlan) -> ExecutionReport {
    let total = plan.len();
    let mut succeeded = 0;

    for (index, entry) in plan.iter().enumerate() {
        if let Err(error) = rename_entry(entry) {
            let target = entry.target_path();
            tracing::error!(
                "Rename {} of {} failed ({} -> {}): {}",
                index + 1,
                total,
                entry.source.path.display(),
                target.display(),
                error
            );
            return ExecutionReport {
                total,
                succeeded,
                failure: Some(RenameFailure {
                    index,
                    source: entry.source.path.clone(),
                    target,
                    error,
                }),
            };
        }
        succeeded += 1;
    }

    tracing::info!(
        "Renamed {} files in {}",
        succeeded,
        plan.folder().display()
    );
    ExecutionReport {
        total,
        succeeded,
        failure: None,
    }
}

fn rename_entry(entry: &RenamePlanEntry) -> io::Result<()> {
    if entry.is_identity() {
        return Ok(());
    }

    let target = entry.target_path();
    match fs::symlink_metadata(&target) {
        Ok(existing) if !is_case_change_of_source(entry, &existing) => {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Target already exists: {}", target.display()),
            ));
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    fs::rename(&entry.source.path, &target)?;
    tracing::debug!("{} -> {}", entry.source.name, entry.target);
    Ok(())
}

/// True when the entry at the target path is the source file itself.
///
/// Case-insensitive filesystems report the target as existing when only
/// the letter case changes, e.g. `img_001.jpg` to `IMG_001.jpg`.
fn is_case_change_of_source(entry: &RenamePlanEntry, existing: &fs::Metadata) -> bool {
    if entry.source.name.to_lowercase() != entry.target.to_lowercase() {
        return false;
    }
    same_file(&entry.source.path, &entry.target_path(), existing)
}

#[cfg(unix)]
fn same_file(source: &Path, _target: &Path, existing: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    match fs::symlink_metadata(source) {
        Ok(m) => m.dev() == existing.dev() && m.ino() == existing.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn same_file(source: &Path, target: &Path, _existing: &fs::Metadata) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
