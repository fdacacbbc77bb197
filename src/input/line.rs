// src/input/line.rs
use super::keyboard::KeyAction;
use unicode_segmentation::UnicodeSegmentation;

const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    None,
    Submit(String),
    Complete,
    Quit,
}

/// Line being edited at the prompt. The cursor is a byte offset that always
/// sits on a grapheme boundary.
#[derive(Debug, Default)]
pub struct InputState {
    content: String,
    cursor: usize,
    history: Vec<String>,
    history_position: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn before_cursor(&self) -> &str {
        &self.content[..self.cursor]
    }

    pub fn handle_action(&mut self, action: KeyAction) -> InputEvent {
        match action {
            KeyAction::InsertChar(c) => {
                self.content.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            KeyAction::Backspace => {
                let previous = self.previous_boundary();
                self.content.replace_range(previous..self.cursor, "");
                self.cursor = previous;
            }
            KeyAction::Delete => {
                let next = self.next_boundary();
                self.content.replace_range(self.cursor..next, "");
            }
            KeyAction::MoveLeft => self.cursor = self.previous_boundary(),
            KeyAction::MoveRight => self.cursor = self.next_boundary(),
            KeyAction::MoveToStart => self.cursor = 0,
            KeyAction::MoveToEnd => self.cursor = self.content.len(),
            KeyAction::ClearLine => self.set_content(String::new()),
            KeyAction::HistoryPrevious => self.history_previous(),
            KeyAction::HistoryNext => self.history_next(),
            KeyAction::Submit => {
                let line = std::mem::take(&mut self.content);
                self.cursor = 0;
                self.history_position = None;
                self.add_to_history(&line);
                return InputEvent::Submit(line);
            }
            KeyAction::Complete => return InputEvent::Complete,
            KeyAction::Quit => return InputEvent::Quit,
            KeyAction::NoAction => {}
        }
        InputEvent::None
    }

    /// Replaces the word under the cursor with `candidate`. A finished
    /// completion is followed by a space.
    pub fn apply_completion(&mut self, candidate: &str, finished: bool) {
        let start = self.word_start();
        let mut replacement = candidate.to_string();
        if finished {
            replacement.push(' ');
        }
        self.content.replace_range(start..self.cursor, &replacement);
        self.cursor = start + replacement.len();
    }

    /// The partially typed word under the cursor.
    pub fn current_word(&self) -> &str {
        &self.content[self.word_start()..self.cursor]
    }

    fn word_start(&self) -> usize {
        self.before_cursor()
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8())
    }

    fn previous_boundary(&self) -> usize {
        self.before_cursor()
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .graphemes(true)
            .next()
            .map_or(self.cursor, |g| self.cursor + g.len())
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor = self.content.len();
    }

    fn add_to_history(&mut self, entry: &str) {
        if entry.trim().is_empty() || self.history.last().is_some_and(|last| last == entry) {
            return;
        }
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(entry.to_string());
    }

    fn history_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let position = match self.history_position {
            Some(0) => 0,
            Some(position) => position - 1,
            None => self.history.len() - 1,
        };
        self.history_position = Some(position);
        self.set_content(self.history[position].clone());
    }

    fn history_next(&mut self) {
        match self.history_position {
            Some(position) if position + 1 < self.history.len() => {
                self.history_position = Some(position + 1);
                self.set_content(self.history[position + 1].clone());
            }
            Some(_) => {
                self.history_position = None;
                self.set_content(String::new());
            }
            None => {}
        }
    }
}

/// Longest prefix shared by all candidates.
pub fn common_prefix(candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    let mut end = first.len();
    for candidate in &candidates[1..] {
        end = first
            .char_indices()
            .zip(candidate.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8())
            .min(end);
    }
    first[..end].to_string()
}
