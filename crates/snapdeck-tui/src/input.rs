use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snapdeck_core::pager::PagerKey;

use crate::app::App;
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Offered to the pager first; falls back to the focused control
    Arrow(PagerKey),
    NextSection,
    PrevSection,
    /// Free scroll by rows (multiplied by the configured step)
    ScrollLines(i16),
    /// Free scroll by viewports
    ScrollPages(i16),
    ScrollToTop,
    ScrollToBottom,
    OpenPrompt,
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.is_input_mode() {
        return handle_input_mode(key);
    }

    keymap.lookup(&key).cloned().unwrap_or(Action::None)
}

/// Keys while the jump prompt has focus
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Up, _) => Action::Arrow(PagerKey::Up),
        (KeyCode::Down, _) => Action::Arrow(PagerKey::Down),
        (KeyCode::Left, _) => Action::Arrow(PagerKey::Left),
        (KeyCode::Right, _) => Action::Arrow(PagerKey::Right),
        (KeyCode::Char(c), _) => Action::InputChar(c),
        _ => Action::None,
    }
}
