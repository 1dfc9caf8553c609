// CLI module for argument parsing and configuration

use crate::config::UserConfig;
use crate::domain::planner::validate_prefix;
use crate::domain::{LoadOptions, NumberingScheme, SortKey};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

pub use crate::domain::planner::MAX_WIDTH;

/// Renum - batch rename the files of a folder to PREFIX + sequence number
///
/// Files keep their extension. Without --dry-run or --yes an interactive
/// preview opens where sort order and prefix can be changed before applying.
#[derive(Parser, Debug, Clone)]
#[command(name = "renum")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder whose files are renamed
    ///
    /// If not specified, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Text placed before the sequence number
    #[arg(short = 'p', long = "prefix")]
    pub prefix: Option<String>,

    /// Order in which files are numbered
    #[arg(short = 's', long = "sort", value_enum)]
    pub sort_by: Option<SortOrder>,

    /// Minimum digits in the sequence number (larger numbers widen)
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// Leave files starting with '.' out of the batch
    #[arg(long = "skip-hidden", action = ArgAction::SetTrue)]
    pub skip_hidden: bool,

    /// Print the planned renames and exit without touching any file
    #[arg(short = 'n', long = "dry-run", action = ArgAction::SetTrue, conflicts_with = "yes")]
    pub dry_run: bool,

    /// Apply the renames without the interactive preview
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    pub yes: bool,

    /// Log debug output
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Sort order options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Natural order by file name (file2 before file10)
    Name,
    /// Modification time (oldest first)
    Modified,
    /// Creation time (oldest first)
    Created,
    /// File size (smallest first)
    Size,
}

impl From<SortOrder> for SortKey {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Name => SortKey::ByName,
            SortOrder::Modified => SortKey::ByModifiedTime,
            SortOrder::Created => SortKey::ByCreatedTime,
            SortOrder::Size => SortKey::BySize,
        }
    }
}

/// What the binary does after loading the folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    DryRun,
    Apply,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if !self.directory.exists() {
            return Err(format!(
                "Directory does not exist: {}",
                self.directory.display()
            ));
        }

        if !self.directory.is_dir() {
            return Err(format!(
                "Path is not a directory: {}",
                self.directory.display()
            ));
        }

        if let Some(width) = self.width {
            if !(1..=MAX_WIDTH).contains(&width) {
                return Err(format!(
                    "Invalid width {}: must be between 1 and {}",
                    width, MAX_WIDTH
                ));
            }
        }

        if let Some(ref prefix) = self.prefix {
            validate_prefix(prefix).map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    pub fn mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else if self.yes {
            RunMode::Apply
        } else {
            RunMode::Interactive
        }
    }
}

/// Settings resolved from CLI arguments over the saved user config
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub sort_key: SortKey,
    pub scheme: NumberingScheme,
    pub load_options: LoadOptions,
    pub mode: RunMode,
    pub verbose: bool,
}

impl AppConfig {
    /// Command line values win; anything not given comes from `saved`.
    ///
    /// A saved width outside `1..=MAX_WIDTH` is clamped into range.
    pub fn resolve(args: Args, saved: &UserConfig) -> Self {
        let mode = args.mode();
        let width = args.width.unwrap_or(saved.width);
        if !(1..=MAX_WIDTH).contains(&width) {
            tracing::warn!(
                "Width {} out of range, using {}",
                width,
                width.clamp(1, MAX_WIDTH)
            );
        }
        AppConfig {
            prefix: args.prefix.unwrap_or_else(|| saved.prefix.clone()),
            sort_key: args.sort_by.map(SortKey::from).unwrap_or(saved.sort_key),
            scheme: NumberingScheme::new(width),
            load_options: LoadOptions {
                include_hidden: !args.skip_hidden && saved.include_hidden,
            },
            directory: args.directory,
            mode,
            verbose: args.verbose,
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig::resolve(args, &UserConfig::default())
    }
}
