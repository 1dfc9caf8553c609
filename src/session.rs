//! Session state threaded through load, preview and apply

use crate::domain::{
    build_plan, execute_plan, load_files_with_options, ExecutionReport, FileRecord, LoadOptions,
    NumberingScheme, RenamePlan, SortKey,
};
use crate::error::{RenumError, Result};
use std::path::{Path, PathBuf};

/// Last thing that happened, rendered as the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Loaded(usize),
    PreviewUpdated,
    Renamed(usize),
    RenameFailed { succeeded: usize, total: usize },
    Error(String),
}

/// Everything the shell remembers between core calls.
///
/// The core functions are stateless; this struct holds their inputs and
/// the staged plan, and drops the plan whenever an input changes.
#[derive(Debug)]
pub struct Session {
    folder: Option<PathBuf>,
    files: Vec<FileRecord>,
    sort_key: SortKey,
    prefix: String,
    scheme: NumberingScheme,
    load_options: LoadOptions,
    plan: Option<RenamePlan>,
    status: Status,
}

impl Session {
    pub fn new(sort_key: SortKey, prefix: String, scheme: NumberingScheme) -> Self {
        Self {
            folder: None,
            files: Vec::new(),
            sort_key,
            prefix,
            scheme,
            load_options: LoadOptions::default(),
            plan: None,
            status: Status::Ready,
        }
    }

    pub fn with_load_options(mut self, load_options: LoadOptions) -> Self {
        self.load_options = load_options;
        self
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn scheme(&self) -> NumberingScheme {
        self.scheme
    }

    pub fn plan(&self) -> Option<&RenamePlan> {
        self.plan.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Loads `folder`, replacing any previous files and discarding the plan.
    ///
    /// On failure the previous folder and files are left untouched.
    pub fn open(&mut self, folder: &Path) -> Result<()> {
        let files = self.record(load_files_with_options(folder, &self.load_options))?;
        self.folder = Some(folder.to_path_buf());
        self.files = files;
        self.plan = None;
        self.status = Status::Loaded(self.files.len());
        Ok(())
    }

    /// Reloads the current folder from disk
    pub fn reload(&mut self) -> Result<()> {
        match self.folder.clone() {
            Some(folder) => self.open(&folder),
            None => Ok(()),
        }
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        if self.sort_key != sort_key {
            self.sort_key = sort_key;
            self.plan = None;
        }
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        if self.prefix != prefix {
            self.prefix = prefix.to_string();
            self.plan = None;
        }
    }

    pub fn set_width(&mut self, width: usize) {
        let scheme = NumberingScheme::new(width);
        if self.scheme != scheme {
            self.scheme = scheme;
            self.plan = None;
        }
    }

    /// Orders the loaded files and stages a fresh plan
    pub fn preview(&mut self) -> Result<&RenamePlan> {
        if self.files.is_empty() {
            return self.record(Err(RenumError::EmptyInput));
        }
        let plan = self.record(build_plan(
            &self.files,
            self.sort_key,
            &self.prefix,
            &self.scheme,
        ))?;
        self.status = Status::PreviewUpdated;
        Ok(self.plan.insert(plan))
    }

    /// Applies the staged plan, then reloads the folder.
    ///
    /// The plan is consumed whatever the outcome, since names on disk have
    /// changed. A partial failure is returned as a report, not an error.
    pub fn execute(&mut self) -> Result<ExecutionReport> {
        if self.files.is_empty() {
            return self.record(Err(RenumError::EmptyInput));
        }
        let plan = match self.plan.take() {
            Some(plan) => plan,
            None => return self.record(Err(RenumError::NoPreview)),
        };

        let report = execute_plan(&plan);
        if let Err(e) = self.reload() {
            // Records from before the batch no longer match the disk
            tracing::warn!("Reload after rename failed: {}", e);
            self.files.clear();
        }
        self.status = match &report.failure {
            None => Status::Renamed(report.succeeded),
            Some(_) => Status::RenameFailed {
                succeeded: report.succeeded,
                total: report.total,
            },
        };
        Ok(report)
    }

    pub fn status_line(&self) -> String {
        match &self.status {
            Status::Ready => "Ready".to_string(),
            Status::Loaded(count) => format!("Loaded {} files", count),
            Status::PreviewUpdated => "Preview updated".to_string(),
            Status::Renamed(count) => format!("Renamed {} files", count),
            Status::RenameFailed { succeeded, total } => {
                format!("Rename failed after {} of {}", succeeded, total)
            }
            Status::Error(message) => message.clone(),
        }
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.status = Status::Error(e.to_string());
        }
        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SortKey::default(), String::new(), NumberingScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn folder_with(names: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            fs::write(temp_dir.path().join(name), b"data").unwrap();
        }
        temp_dir
    }

    fn opened(names: &[&str]) -> (TempDir, Session) {
        let temp_dir = folder_with(names);
        let mut session = Session::new(
            SortKey::ByName,
            "IMG_".to_string(),
            NumberingScheme::default(),
        );
        session.open(temp_dir.path()).unwrap();
        (temp_dir, session)
    }

    #[test]
    fn test_new_session_is_ready() {
        let session = Session::default();
        assert!(session.folder().is_none());
        assert!(session.files().is_empty());
        assert_eq!(session.status_line(), "Ready");
    }

    #[test]
    fn test_open_loads_files() {
        let (temp_dir, session) = opened(&["a.txt", "b.txt"]);
        assert_eq!(session.folder(), Some(temp_dir.path()));
        assert_eq!(session.files().len(), 2);
        assert_eq!(session.status_line(), "Loaded 2 files");
    }

    #[test]
    fn test_open_missing_folder_keeps_previous_state() {
        let (temp_dir, mut session) = opened(&["a.txt"]);

        let result = session.open(Path::new("/nonexistent/folder"));

        assert!(matches!(result, Err(RenumError::FolderAccess { .. })));
        assert_eq!(session.folder(), Some(temp_dir.path()));
        assert_eq!(session.files().len(), 1);
        assert!(session.status_line().contains("Cannot access folder"));
    }

    #[test]
    fn test_preview_without_files_is_empty_input() {
        let mut session = Session::default();
        assert!(matches!(session.preview(), Err(RenumError::EmptyInput)));
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_preview_stages_plan() {
        let (_temp_dir, mut session) = opened(&["a10.txt", "a2.txt"]);

        let plan = session.preview().unwrap();
        let targets: Vec<_> = plan.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["IMG_001.txt", "IMG_002.txt"]);
        assert!(session.plan().is_some());
        assert_eq!(session.status_line(), "Preview updated");
    }

    #[test]
    fn test_changing_inputs_discards_plan() {
        let (_temp_dir, mut session) = opened(&["a.txt"]);

        session.preview().unwrap();
        session.set_sort_key(SortKey::BySize);
        assert!(session.plan().is_none());

        session.preview().unwrap();
        session.set_prefix("new_");
        assert!(session.plan().is_none());

        session.preview().unwrap();
        session.set_width(5);
        assert!(session.plan().is_none());
    }

    #[test]
    fn test_unchanged_inputs_keep_plan() {
        let (_temp_dir, mut session) = opened(&["a.txt"]);

        session.preview().unwrap();
        session.set_sort_key(SortKey::ByName);
        session.set_prefix("IMG_");
        session.set_width(3);
        assert!(session.plan().is_some());
    }

    #[test]
    fn test_execute_without_preview() {
        let (_temp_dir, mut session) = opened(&["a.txt"]);
        assert!(matches!(session.execute(), Err(RenumError::NoPreview)));
    }

    #[test]
    fn test_execute_without_files() {
        let mut session = Session::default();
        assert!(matches!(session.execute(), Err(RenumError::EmptyInput)));
    }

    #[test]
    fn test_execute_applies_and_reloads() {
        let (temp_dir, mut session) = opened(&["b.txt", "a.txt"]);

        session.preview().unwrap();
        let report = session.execute().unwrap();

        assert!(report.is_complete());
        assert_eq!(report.succeeded, 2);
        assert!(session.plan().is_none());
        assert_eq!(session.status_line(), "Renamed 2 files");
        assert!(temp_dir.path().join("IMG_001.txt").exists());
        let mut names: Vec<_> = session.files().iter().map(|f| f.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["IMG_001.txt", "IMG_002.txt"]);
    }

    #[test]
    fn test_execute_partial_failure_reports_and_reloads() {
        let (temp_dir, mut session) = opened(&["a.txt", "b.txt", "c.txt"]);

        session.preview().unwrap();
        fs::remove_file(temp_dir.path().join("b.txt")).unwrap();
        let report = session.execute().unwrap();

        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failure.as_ref().unwrap().index, 1);
        assert_eq!(session.status_line(), "Rename failed after 1 of 3");
        assert_eq!(session.files().len(), 2);
        assert!(session.plan().is_none());
    }
}
