// TUI module for the interactive rename preview
pub mod colors;
pub mod input;

// Re-exports
pub use colors::*;
pub use input::{handle_confirm_input, handle_key_event, handle_text_input, KeyAction, TextInput};

use crate::domain::planner::validate_prefix;
use crate::domain::{order, ExecutionReport};
use crate::session::Session;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};
use std::path::PathBuf;

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main list view
    Browsing,
    /// Help overlay visible
    Help,
    /// Typing a new prefix
    EditPrefix,
    /// Typing a folder path
    OpenFolder,
    /// Confirmation dialog before renaming
    ConfirmApply,
    /// Outcome of the last apply
    Result,
}

/// What the last apply did, kept for the result overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub succeeded: usize,
    pub total: usize,
    /// One-based entry number, source name and error text of the failure
    pub failure: Option<(usize, String, String)>,
}

impl From<&ExecutionReport> for ReportSummary {
    fn from(report: &ExecutionReport) -> Self {
        Self {
            succeeded: report.succeeded,
            total: report.total,
            failure: report.failure.as_ref().map(|f| {
                let name = f
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (f.index + 1, name, f.error.to_string())
            }),
        }
    }
}

/// Presentation-only state; everything about the rename lives in [`Session`]
#[derive(Debug)]
pub struct UiState {
    pub view: ViewState,
    pub scroll: usize,
    pub input: String,
    /// One-off message shown instead of the session status
    pub notice: Option<String>,
    pub last_report: Option<ReportSummary>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: ViewState::Browsing,
            scroll: 0,
            input: String::new(),
            notice: None,
            last_report: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the main loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// A batch finished without errors
    Applied,
    Quit,
}

/// Routes one key press to the session according to the current view
pub fn handle_event(session: &mut Session, ui: &mut UiState, key: KeyEvent) -> LoopControl {
    match ui.view {
        ViewState::Help | ViewState::Result => {
            ui.view = ViewState::Browsing;
            LoopControl::Continue
        }
        ViewState::ConfirmApply => handle_confirm(session, ui, key),
        ViewState::EditPrefix | ViewState::OpenFolder => {
            handle_text_field(session, ui, key);
            LoopControl::Continue
        }
        ViewState::Browsing => handle_browsing(session, ui, key),
    }
}

fn handle_browsing(session: &mut Session, ui: &mut UiState, key: KeyEvent) -> LoopControl {
    let action = handle_key_event(key);
    if action != KeyAction::None {
        ui.notice = None;
    }

    match action {
        KeyAction::Quit => return LoopControl::Quit,
        KeyAction::CycleSort => {
            session.set_sort_key(session.sort_key().next());
            ui.scroll = 0;
        }
        KeyAction::EditPrefix => {
            ui.input = session.prefix().to_string();
            ui.view = ViewState::EditPrefix;
        }
        KeyAction::OpenFolder => {
            ui.input = session
                .folder()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.view = ViewState::OpenFolder;
        }
        KeyAction::Preview => {
            // Failures are recorded in the session status line
            let _ = session.preview();
            ui.scroll = 0;
        }
        KeyAction::Apply => {
            if session.files().is_empty() {
                ui.notice = Some("No files loaded: open a folder first".to_string());
            } else if session.plan().is_none() {
                ui.notice = Some("Preview first (Enter), then apply".to_string());
            } else {
                ui.view = ViewState::ConfirmApply;
            }
        }
        KeyAction::ScrollDown => {
            if ui.scroll + 1 < row_count(session) {
                ui.scroll += 1;
            }
        }
        KeyAction::ScrollUp => ui.scroll = ui.scroll.saturating_sub(1),
        KeyAction::Help => ui.view = ViewState::Help,
        KeyAction::Confirm | KeyAction::Cancel | KeyAction::None => {}
    }

    LoopControl::Continue
}

fn handle_confirm(session: &mut Session, ui: &mut UiState, key: KeyEvent) -> LoopControl {
    match handle_confirm_input(key) {
        KeyAction::Confirm => match session.execute() {
            Ok(report) => {
                let complete = report.is_complete();
                ui.last_report = Some(ReportSummary::from(&report));
                ui.view = ViewState::Result;
                ui.scroll = 0;
                if complete {
                    LoopControl::Applied
                } else {
                    LoopControl::Continue
                }
            }
            Err(_) => {
                ui.view = ViewState::Browsing;
                LoopControl::Continue
            }
        },
        KeyAction::Cancel => {
            ui.view = ViewState::Browsing;
            LoopControl::Continue
        }
        _ => LoopControl::Continue,
    }
}

fn handle_text_field(session: &mut Session, ui: &mut UiState, key: KeyEvent) {
    match handle_text_input(key) {
        TextInput::Push(c) => ui.input.push(c),
        TextInput::Backspace => {
            ui.input.pop();
        }
        TextInput::Cancel => ui.view = ViewState::Browsing,
        TextInput::Commit => {
            let value = std::mem::take(&mut ui.input);
            if ui.view == ViewState::EditPrefix {
                match validate_prefix(&value) {
                    Ok(()) => session.set_prefix(&value),
                    Err(e) => ui.notice = Some(e.to_string()),
                }
            } else if !value.trim().is_empty() {
                let _ = session.open(&PathBuf::from(value.trim()));
                ui.scroll = 0;
            }
            ui.view = ViewState::Browsing;
        }
        TextInput::None => {}
    }
}

fn row_count(session: &Session) -> usize {
    session
        .plan()
        .map(|p| p.len())
        .unwrap_or_else(|| session.files().len())
}

/// Renders the whole screen for the current session and view
pub fn render(frame: &mut Frame, session: &Session, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // File table
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session);
    render_table(frame, chunks[1], session, ui);
    render_footer(frame, chunks[2], session, ui);

    match ui.view {
        ViewState::Help => render_help_overlay(frame),
        ViewState::EditPrefix => render_input_overlay(frame, " Prefix ", &ui.input),
        ViewState::OpenFolder => render_input_overlay(frame, " Open Folder ", &ui.input),
        ViewState::ConfirmApply => render_confirm_apply_overlay(frame, session),
        ViewState::Result => {
            if let Some(summary) = &ui.last_report {
                render_result_overlay(frame, summary);
            }
        }
        ViewState::Browsing => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let folder = session
        .folder()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "No folder selected".to_string());

    let title_line = Line::from(vec![
        Span::styled(
            " Renum ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(folder, Style::default().fg(TEXT_PRIMARY)),
    ]);

    let prefix = if session.prefix().is_empty() {
        "(none)".to_string()
    } else {
        session.prefix().to_string()
    };
    let settings_line = Line::from(vec![
        Span::styled(" Sort: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(session.sort_key().label(), Style::default().fg(TEXT_PRIMARY)),
        Span::styled("  Prefix: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(prefix, Style::default().fg(TEXT_PRIMARY)),
        Span::styled("  Example: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(
            format!("{}{}", session.prefix(), session.scheme().format(1)),
            Style::default().fg(ACCENT_SECONDARY),
        ),
        Span::styled(
            format!("  Files: {}", session.files().len()),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(vec![title_line, settings_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(header, area);
}

fn render_table(frame: &mut Frame, area: Rect, session: &Session, ui: &UiState) {
    let header = Row::new(vec!["#", "Original name", "New name"]).style(
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );

    let (rows, title): (Vec<Row>, &str) = match session.plan() {
        Some(plan) => (
            plan.iter()
                .enumerate()
                .skip(ui.scroll)
                .map(|(i, entry)| {
                    let target_style = if entry.is_identity() {
                        Style::default().fg(TEXT_SECONDARY)
                    } else {
                        Style::default().fg(ACCENT_SECONDARY)
                    };
                    Row::new(vec![
                        Cell::from((i + 1).to_string()),
                        Cell::from(entry.source.name.clone()),
                        Cell::from(entry.target.clone()).style(target_style),
                    ])
                })
                .collect(),
            " Preview ",
        ),
        None => (
            order(session.files(), session.sort_key())
                .into_iter()
                .enumerate()
                .skip(ui.scroll)
                .map(|(i, record)| {
                    Row::new(vec![
                        Cell::from((i + 1).to_string()),
                        Cell::from(record.name),
                        Cell::from("-").style(Style::default().fg(TEXT_SECONDARY)),
                    ])
                })
                .collect(),
            " Files (press Enter to preview) ",
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(title);

    if rows.is_empty() && ui.scroll == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No files to rename",
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press o to open a folder",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(47),
            Constraint::Percentage(47),
        ],
    )
    .header(header)
    .block(block)
    .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, area: Rect, session: &Session, ui: &UiState) {
    let status = ui
        .notice
        .clone()
        .unwrap_or_else(|| session.status_line());

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter: Preview | a: Apply | s: Sort | p: Prefix | o: Open | ?: Help | q: Quit",
            Style::default().fg(TEXT_SECONDARY),
        ),
        Span::raw("   "),
        Span::styled(status, Style::default().fg(ACCENT_HIGHLIGHT)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(footer, area);
}

fn overlay_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK))
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, help_area);

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<8}", key), Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::raw(text),
        ])
    };

    let lines = vec![
        Line::from(""),
        key_line("Enter", "Preview new names"),
        key_line("a", "Apply previewed renames"),
        key_line("s", "Cycle sort order"),
        key_line("p", "Edit prefix"),
        key_line("o", "Open another folder"),
        key_line("↑↓ j k", "Scroll"),
        key_line("q Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(" Help "))
        .style(Style::default().fg(TEXT_PRIMARY));
    frame.render_widget(paragraph, help_area);
}

fn render_input_overlay(frame: &mut Frame, title: &str, value: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {}", value), Style::default().fg(TEXT_PRIMARY)),
            Span::styled("█", Style::default().fg(ACCENT_HIGHLIGHT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter: Save | Esc: Cancel",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(overlay_block(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_confirm_apply_overlay(frame: &mut Frame, session: &Session) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let (count, pending) = session
        .plan()
        .map(|p| (p.len(), p.pending_count()))
        .unwrap_or((0, 0));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Rename {} of {} files?", pending, count),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(ACCENT_PRIMARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw(": Rename   "),
            Span::styled("n", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw(": Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(overlay_block(" Confirm "));
    frame.render_widget(paragraph, area);
}

fn render_result_overlay(frame: &mut Frame, summary: &ReportSummary) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    match &summary.failure {
        None => lines.push(Line::from(Span::styled(
            format!("Renamed {} files", summary.succeeded),
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ))),
        Some((entry, name, error)) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Stopped at entry {} of {}: {}",
                    entry, summary.total, name
                ),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(error.clone()));
            lines.push(Line::from(format!(
                "{} renamed, {} not attempted",
                summary.succeeded,
                summary.total - summary.succeeded - 1
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Folder reloaded. Press any key",
        Style::default().fg(TEXT_SECONDARY),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(overlay_block(" Result "));
    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NumberingScheme, SortKey};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn opened(names: &[&str]) -> (TempDir, Session) {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            fs::write(temp_dir.path().join(name), b"data").unwrap();
        }
        let mut session = Session::new(
            SortKey::ByName,
            "IMG_".to_string(),
            NumberingScheme::default(),
        );
        session.open(temp_dir.path()).unwrap();
        (temp_dir, session)
    }

    fn draw(session: &Session, ui: &UiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, session, ui)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    mod event_tests {
        use super::*;

        #[test]
        fn test_cycle_sort_changes_session_key() {
            let (_dir, mut session) = opened(&["a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Char('s')));

            assert_eq!(session.sort_key(), SortKey::ByModifiedTime);
        }

        #[test]
        fn test_edit_prefix_flow() {
            let (_dir, mut session) = opened(&["a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Char('p')));
            assert_eq!(ui.view, ViewState::EditPrefix);
            assert_eq!(ui.input, "IMG_");

            for _ in 0..4 {
                handle_event(&mut session, &mut ui, key(KeyCode::Backspace));
            }
            handle_event(&mut session, &mut ui, key(KeyCode::Char('x')));
            handle_event(&mut session, &mut ui, key(KeyCode::Enter));

            assert_eq!(ui.view, ViewState::Browsing);
            assert_eq!(session.prefix(), "x");
        }

        #[test]
        fn test_edit_prefix_rejects_separator() {
            let (_dir, mut session) = opened(&["a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Char('p')));
            handle_event(&mut session, &mut ui, key(KeyCode::Char('/')));
            handle_event(&mut session, &mut ui, key(KeyCode::Enter));

            assert_eq!(session.prefix(), "IMG_");
            assert!(ui.notice.as_deref().unwrap().contains("Invalid prefix"));
        }

        #[test]
        fn test_apply_requires_preview() {
            let (_dir, mut session) = opened(&["a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Char('a')));

            assert_eq!(ui.view, ViewState::Browsing);
            assert!(ui.notice.is_some());
        }

        #[test]
        fn test_preview_confirm_apply() {
            let (dir, mut session) = opened(&["b.txt", "a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Enter));
            assert!(session.plan().is_some());

            handle_event(&mut session, &mut ui, key(KeyCode::Char('a')));
            assert_eq!(ui.view, ViewState::ConfirmApply);

            let control = handle_event(&mut session, &mut ui, key(KeyCode::Char('y')));

            assert_eq!(control, LoopControl::Applied);
            assert_eq!(ui.view, ViewState::Result);
            assert_eq!(ui.last_report.as_ref().unwrap().succeeded, 2);
            assert!(dir.path().join("IMG_001.txt").exists());
            assert!(dir.path().join("IMG_002.txt").exists());
        }

        #[test]
        fn test_cancel_apply_leaves_files() {
            let (dir, mut session) = opened(&["a.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Enter));
            handle_event(&mut session, &mut ui, key(KeyCode::Char('a')));
            handle_event(&mut session, &mut ui, key(KeyCode::Char('n')));

            assert_eq!(ui.view, ViewState::Browsing);
            assert!(dir.path().join("a.txt").exists());
            assert!(session.plan().is_some());
        }

        #[test]
        fn test_partial_failure_summary() {
            let (dir, mut session) = opened(&["a.txt", "b.txt", "c.txt"]);
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Enter));
            fs::remove_file(dir.path().join("b.txt")).unwrap();
            handle_event(&mut session, &mut ui, key(KeyCode::Char('a')));
            let control = handle_event(&mut session, &mut ui, key(KeyCode::Enter));

            assert_eq!(control, LoopControl::Continue);
            let summary = ui.last_report.as_ref().unwrap();
            assert_eq!(summary.succeeded, 1);
            let (entry, name, _) = summary.failure.as_ref().unwrap();
            assert_eq!(*entry, 2);
            assert_eq!(name, "b.txt");
        }

        #[test]
        fn test_scroll_is_bounded() {
            let (_dir, mut session) = opened(&["a.txt", "b.txt"]);
            let mut ui = UiState::new();

            for _ in 0..5 {
                handle_event(&mut session, &mut ui, key(KeyCode::Down));
            }
            assert_eq!(ui.scroll, 1);

            for _ in 0..5 {
                handle_event(&mut session, &mut ui, key(KeyCode::Up));
            }
            assert_eq!(ui.scroll, 0);
        }

        #[test]
        fn test_quit() {
            let mut session = Session::default();
            let mut ui = UiState::new();
            let control = handle_event(&mut session, &mut ui, key(KeyCode::Char('q')));
            assert_eq!(control, LoopControl::Quit);
        }

        #[test]
        fn test_help_closes_on_any_key() {
            let mut session = Session::default();
            let mut ui = UiState::new();

            handle_event(&mut session, &mut ui, key(KeyCode::Char('?')));
            assert_eq!(ui.view, ViewState::Help);

            let control = handle_event(&mut session, &mut ui, key(KeyCode::Char('q')));
            assert_eq!(control, LoopControl::Continue);
            assert_eq!(ui.view, ViewState::Browsing);
        }
    }

    mod layout_tests {
        use super::*;

        #[test]
        fn test_render_empty_session() {
            let session = Session::default();
            let content = draw(&session, &UiState::new());

            assert!(content.contains("No folder selected"));
            assert!(content.contains("No files to rename"));
        }

        #[test]
        fn test_render_files_before_preview() {
            let (_dir, session) = opened(&["a10.txt", "a2.txt"]);
            let content = draw(&session, &UiState::new());

            assert!(content.contains("a2.txt"));
            assert!(content.contains("a10.txt"));
            assert!(content.contains("Loaded 2 files"));
        }

        #[test]
        fn test_render_preview_shows_new_names() {
            let (_dir, mut session) = opened(&["a.jpg"]);
            session.preview().unwrap();
            let content = draw(&session, &UiState::new());

            assert!(content.contains("IMG_001.jpg"));
            assert!(content.contains("Preview updated"));
        }

        #[test]
        fn test_render_header_settings() {
            let (_dir, session) = opened(&["a.jpg"]);
            let content = draw(&session, &UiState::new());

            assert!(content.contains("Sort: Name"));
            assert!(content.contains("IMG_001"));
        }

        #[test]
        fn test_render_confirm_overlay() {
            let (_dir, mut session) = opened(&["a.jpg", "b.jpg"]);
            session.preview().unwrap();
            let ui = UiState {
                view: ViewState::ConfirmApply,
                ..UiState::new()
            };
            let content = draw(&session, &ui);

            assert!(content.contains("Rename 2 of 2 files?"));
        }

        #[test]
        fn test_render_result_overlay_failure() {
            let session = Session::default();
            let ui = UiState {
                view: ViewState::Result,
                last_report: Some(ReportSummary {
                    succeeded: 2,
                    total: 5,
                    failure: Some((3, "c.txt".to_string(), "gone".to_string())),
                }),
                ..UiState::new()
            };
            let content = draw(&session, &ui);

            assert!(content.contains("Stopped at entry 3 of 5"));
            assert!(content.contains("2 renamed, 2 not attempted"));
        }
    }
}
