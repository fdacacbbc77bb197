use crate::core::constants::PROMPT;
use crate::ui::color;
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{self, IsTerminal, Write};
use unicode_width::UnicodeWidthStr;

/// Writes one message line to the console, above the prompt when in raw mode.
pub fn emit(line: &str) {
    let mut stdout = io::stdout();
    let text = if stdout.is_terminal() {
        color::to_ansi(line)
    } else {
        color::strip(line)
    };

    let result = if terminal::is_raw_mode_enabled().unwrap_or(false) {
        queue!(
            stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print(text),
            Print("\r\n")
        )
    } else {
        writeln!(stdout, "{}", text)
    };

    if let Err(e) = result.and_then(|_| stdout.flush()) {
        log::warn!("Console write failed: {}", e);
    }
}

/// Redraws the prompt line with the cursor placed after `cursor_byte`.
pub fn render_prompt(buffer: &str, cursor_byte: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    let before_cursor = &buffer[..cursor_byte.min(buffer.len())];
    let column = PROMPT.width() + before_cursor.width();

    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(PROMPT),
        Print(buffer),
        cursor::MoveToColumn(column.min(u16::MAX as usize) as u16)
    )?;
    stdout.flush()
}
