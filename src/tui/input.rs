use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Switch to the next sort order
    CycleSort,
    /// Start editing the prefix
    EditPrefix,
    /// Start typing another folder path
    OpenFolder,
    /// Rebuild the rename preview
    Preview,
    /// Ask to apply the previewed renames
    Apply,
    /// Confirm the apply dialog
    Confirm,
    /// Cancel the apply dialog
    Cancel,
    /// Scroll the list down
    ScrollDown,
    /// Scroll the list up
    ScrollUp,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

/// Result of a key press while a text field is focused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Push(char),
    Backspace,
    Commit,
    Cancel,
    None,
}

/// Maps keyboard events to actions
pub fn handle_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit: q, Esc or Ctrl+C
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Quit,

        (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::CycleSort,
        (KeyCode::Char('p'), KeyModifiers::NONE) => KeyAction::EditPrefix,
        (KeyCode::Char('o'), KeyModifiers::NONE) => KeyAction::OpenFolder,

        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Preview,
        (KeyCode::Char('v'), KeyModifiers::NONE) => KeyAction::Preview,
        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::Apply,

        // Navigation
        (KeyCode::Down, KeyModifiers::NONE) => KeyAction::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => KeyAction::ScrollUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::ScrollUp,

        (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::Help,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events to confirmation actions
/// Used when ViewState is ConfirmApply
pub fn handle_confirm_input(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('y'), KeyModifiers::NONE) => KeyAction::Confirm,
        (KeyCode::Char('Y'), KeyModifiers::NONE) => KeyAction::Confirm,
        (KeyCode::Char('Y'), KeyModifiers::SHIFT) => KeyAction::Confirm,
        (KeyCode::Enter, KeyModifiers::NONE) => KeyAction::Confirm,

        (KeyCode::Char('n'), KeyModifiers::NONE) => KeyAction::Cancel,
        (KeyCode::Char('N'), KeyModifiers::NONE) => KeyAction::Cancel,
        (KeyCode::Char('N'), KeyModifiers::SHIFT) => KeyAction::Cancel,
        (KeyCode::Esc, KeyModifiers::NONE) => KeyAction::Cancel,

        _ => KeyAction::None,
    }
}

/// Maps keyboard events to edits of a single-line text field
pub fn handle_text_input(key: KeyEvent) -> TextInput {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => TextInput::Cancel,
        (KeyCode::Esc, _) => TextInput::Cancel,
        (KeyCode::Enter, _) => TextInput::Commit,
        (KeyCode::Backspace, _) => TextInput::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => TextInput::Push(c),
        _ => TextInput::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_quit() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_key_settings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('s'))), KeyAction::CycleSort);
        assert_eq!(handle_key_event(key(KeyCode::Char('p'))), KeyAction::EditPrefix);
        assert_eq!(handle_key_event(key(KeyCode::Char('o'))), KeyAction::OpenFolder);
    }

    #[test]
    fn test_key_preview_and_apply() {
        assert_eq!(handle_key_event(key(KeyCode::Enter)), KeyAction::Preview);
        assert_eq!(handle_key_event(key(KeyCode::Char('v'))), KeyAction::Preview);
        assert_eq!(handle_key_event(key(KeyCode::Char('a'))), KeyAction::Apply);
    }

    #[test]
    fn test_key_navigation() {
        assert_eq!(handle_key_event(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(handle_key_event(key(KeyCode::Char('j'))), KeyAction::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('k'))), KeyAction::ScrollUp);
    }

    #[test]
    fn test_key_help() {
        assert_eq!(handle_key_event(key(KeyCode::Char('?'))), KeyAction::Help);
    }

    #[test]
    fn test_key_none() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(handle_confirm_input(key(KeyCode::Char('y'))), KeyAction::Confirm);
        assert_eq!(handle_confirm_input(key(KeyCode::Char('Y'))), KeyAction::Confirm);
        assert_eq!(handle_confirm_input(key(KeyCode::Enter)), KeyAction::Confirm);
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(handle_confirm_input(key(KeyCode::Char('n'))), KeyAction::Cancel);
        assert_eq!(handle_confirm_input(key(KeyCode::Char('N'))), KeyAction::Cancel);
        assert_eq!(handle_confirm_input(key(KeyCode::Esc)), KeyAction::Cancel);
    }

    #[test]
    fn test_confirm_input_ignores_other_keys() {
        assert_eq!(handle_confirm_input(key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(handle_confirm_input(key(KeyCode::Char('a'))), KeyAction::None);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(handle_text_input(key(KeyCode::Char('q'))), TextInput::Push('q'));
        let upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handle_text_input(upper), TextInput::Push('Q'));
        assert_eq!(handle_text_input(key(KeyCode::Backspace)), TextInput::Backspace);
        assert_eq!(handle_text_input(key(KeyCode::Enter)), TextInput::Commit);
        assert_eq!(handle_text_input(key(KeyCode::Esc)), TextInput::Cancel);
        assert_eq!(handle_text_input(key(KeyCode::Tab)), TextInput::None);
    }
}
