//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,

    // Amount editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Currency selects
    SelectNext,
    SelectPrev,

    // Commands
    Convert,
    Swap,
    Clear,
    ReloadCurrencies,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused form field (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Field {
    #[default]
    Amount,
    Source,
    Target,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::Amount => Field::Source,
            Field::Source => Field::Target,
            Field::Target => Field::Amount,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Amount => Field::Target,
            Field::Source => Field::Amount,
            Field::Target => Field::Source,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_field: Field,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter if active_field == Field::Amount => {
                Some(UiEvent::StartEditing)
            }
            KeyCode::Enter => Some(UiEvent::Convert),
            KeyCode::Up if active_field != Field::Amount => Some(UiEvent::SelectPrev),
            KeyCode::Down if active_field != Field::Amount => Some(UiEvent::SelectNext),
            KeyCode::Char('c') => Some(UiEvent::Convert),
            KeyCode::Char('s') => Some(UiEvent::Swap),
            KeyCode::Char('x') => Some(UiEvent::Clear),
            KeyCode::Char('r') => Some(UiEvent::ReloadCurrencies),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            KeyCode::Enter => Some(UiEvent::Convert),
            _ => None,
        },
    }
}
