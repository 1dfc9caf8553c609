use renum::cli::{AppConfig, Args, RunMode};
use renum::config::UserConfig;
use renum::logging::{self, LogTarget};
use renum::tui::{handle_event, render, LoopControl, UiState};
use renum::{RenamePlan, RenumError, Session};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, process, time::Duration};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let log_target = match args.mode() {
        RunMode::Interactive => LogTarget::File,
        RunMode::DryRun | RunMode::Apply => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(log_target, args.verbose) {
        eprintln!("Warning: Logging disabled: {}", e);
    }

    // Load user configuration
    let saved = UserConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load user config: {}", e);
        UserConfig::default()
    });

    let config = AppConfig::resolve(args, &saved);

    let mut session = Session::new(config.sort_key, config.prefix.clone(), config.scheme)
        .with_load_options(config.load_options);
    if let Err(e) = session.open(&config.directory) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match config.mode {
        RunMode::DryRun => run_dry_run(&mut session),
        RunMode::Apply => run_apply(&mut session),
        RunMode::Interactive => run_app(&mut session, saved),
    }
}

/// Prints the plan without renaming anything
fn run_dry_run(session: &mut Session) -> io::Result<()> {
    match session.preview() {
        Ok(plan) => {
            println!("[DRY RUN] No files will be renamed");
            print_plan(plan);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

/// Builds and applies the plan without the interactive preview
fn run_apply(session: &mut Session) -> io::Result<()> {
    if let Err(e) = session.preview() {
        exit_with(e);
    }

    match session.execute().and_then(|report| report.into_result()) {
        Ok(count) => {
            println!("Renamed {} files", count);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn print_plan(plan: &RenamePlan) {
    let width = plan
        .iter()
        .map(|e| e.source.name.chars().count())
        .max()
        .unwrap_or(0);
    for entry in plan {
        let marker = if entry.is_identity() { " (unchanged)" } else { "" };
        println!(
            "  {:<width$}  ->  {}{}",
            entry.source.name,
            entry.target,
            marker,
            width = width
        );
    }
    println!(
        "   {} files, {} to rename in {}",
        plan.len(),
        plan.pending_count(),
        plan.folder().display()
    );
}

fn exit_with(e: RenumError) -> ! {
    if e.is_informational() {
        println!("{}", e);
        process::exit(0);
    }
    eprintln!("Error: {}", e);
    process::exit(1);
}

/// Runs the interactive preview
fn run_app(session: &mut Session, mut user_config: UserConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, session, &mut user_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("{}", session.status_line());

    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    user_config: &mut UserConfig,
) -> io::Result<()> {
    let mut ui = UiState::new();

    loop {
        terminal.draw(|frame| render(frame, session, &ui))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_event(session, &mut ui, key) {
            LoopControl::Quit => break,
            LoopControl::Applied => remember_settings(session, user_config),
            LoopControl::Continue => {}
        }
    }

    Ok(())
}

/// Persists the settings of a successful batch for the next launch
fn remember_settings(session: &Session, user_config: &mut UserConfig) {
    user_config.prefix = session.prefix().to_string();
    user_config.sort_key = session.sort_key();
    user_config.width = session.scheme().width;
    if let Err(e) = user_config.save() {
        tracing::warn!("Failed to save user config: {}", e);
    }
}
