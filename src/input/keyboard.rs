// =====================================================
// FILE: src/input/keyboard.rs - KEY MAPPING
// =====================================================

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    InsertChar(char),
    Backspace,
    Delete,
    Submit,
    Complete,
    HistoryPrevious,
    HistoryNext,
    ClearLine,
    Quit,
    NoAction,
}

#[derive(Debug, Default)]
pub struct KeyboardManager;

impl KeyboardManager {
    pub fn new() -> Self {
        Self
    }

    pub fn get_action(&self, key: &KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::NoAction;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('d'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => KeyAction::MoveToStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => KeyAction::MoveToEnd,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => KeyAction::ClearLine,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if Self::is_control_char(c) {
                    log::warn!("Blocked control character: {:?}", c);
                    KeyAction::NoAction
                } else {
                    KeyAction::InsertChar(c)
                }
            }
            (KeyCode::Tab, _) => KeyAction::Complete,
            (KeyCode::Enter, _) => KeyAction::Submit,
            (KeyCode::Backspace, KeyModifiers::NONE) => KeyAction::Backspace,
            (KeyCode::Backspace, _) => KeyAction::ClearLine,
            (KeyCode::Delete, _) => KeyAction::Delete,
            (KeyCode::Left, _) => KeyAction::MoveLeft,
            (KeyCode::Right, _) => KeyAction::MoveRight,
            (KeyCode::Home, _) => KeyAction::MoveToStart,
            (KeyCode::End, _) => KeyAction::MoveToEnd,
            (KeyCode::Up, _) => KeyAction::HistoryPrevious,
            (KeyCode::Down, _) => KeyAction::HistoryNext,
            _ => KeyAction::NoAction,
        }
    }

    fn is_control_char(c: char) -> bool {
        matches!(c, '\x00'..='\x08' | '\x0B'..='\x0C' | '\x0E'..='\x1F' | '\x7F')
    }
}
