//! Renum - batch renaming of a folder's files to PREFIX + sequence number
//!
//! The core is stateless: [`load_files`] snapshots a folder, [`build_plan`]
//! orders the snapshot and assigns new names, and [`execute_plan`] applies
//! a plan. [`Session`] is the stateful shell that threads them together.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod session;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use domain::{
    build_plan, execute_plan, load_files, load_files_with_options, natural_cmp, order, plan,
    ExecutionReport, FileRecord, LoadOptions, NumberingScheme, RenameFailure, RenamePlan,
    RenamePlanEntry, SortKey,
};
pub use error::{RenumError, Result};
pub use session::Session;
