// =====================================================
// FILE: src/input/console.rs - CONSOLE LOOPS
// =====================================================

use super::keyboard::KeyboardManager;
use super::line::{common_prefix, InputEvent, InputState};
use crate::commands::CommandHandler;
use crate::core::prelude::*;
use crate::core::constants::PROMPT;
use crate::ui::console::{emit, render_prompt};
use crate::ui::terminal::TerminalManager;
use crossterm::event::{self as crossterm_event, Event as CrosstermEvent, KeyEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive raw-mode console with line editing, history and Tab completion.
pub async fn run_interactive(handler: &CommandHandler) -> Result<()> {
    let mut terminal = TerminalManager::new();
    terminal.setup()?;

    let mut keys = spawn_key_reader();
    let keyboard = KeyboardManager::new();
    let mut input = InputState::new();

    flush_outbox(handler);
    render_prompt(input.content(), input.cursor())?;

    while let Some(key) = keys.recv().await {
        match input.handle_action(keyboard.get_action(&key)) {
            InputEvent::None => {}
            InputEvent::Quit => break,
            InputEvent::Complete => complete(handler, &mut input),
            InputEvent::Submit(line) => {
                emit(&format!("{}{}", PROMPT, line));
                let result = handler.handle_input(&line);
                flush_outbox(handler);
                if result.should_exit {
                    break;
                }
            }
        }
        render_prompt(input.content(), input.cursor())?;
    }

    drop(keys);
    terminal.cleanup()
}

/// Reads commands line by line from a non-terminal stdin.
pub async fn run_piped(handler: &CommandHandler) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let result = handler.handle_input(&line);
        flush_outbox(handler);
        if result.should_exit {
            break;
        }
    }
    Ok(())
}

fn complete(handler: &CommandHandler, input: &mut InputState) {
    let candidates = handler.complete_line(input.before_cursor());
    let messages = Bundle::for_locale(&crate::i18n::default_language());
    match candidates.as_slice() {
        [] => {
            log::debug!("No completions for '{}'", input.before_cursor());
            emit(&messages.get("glowstone.console.no-completions"));
        }
        [only] => input.apply_completion(only, true),
        _ => {
            emit(&messages.render("glowstone.console.completions", &[&candidates.join(" ")]));
            let prefix = common_prefix(&candidates);
            if prefix.len() > input.current_word().len() {
                input.apply_completion(&prefix, false);
            }
        }
    }
}

fn flush_outbox(handler: &CommandHandler) {
    for line in handler.outbox().drain() {
        emit(&line);
    }
}

/// Forwards key presses from a blocking poll loop. The loop ends once the
/// receiver is dropped.
fn spawn_key_reader() -> mpsc::Receiver<KeyEvent> {
    let (tx, rx) = mpsc::channel(100);

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match crossterm_event::poll(POLL_INTERVAL) {
                Ok(true) => match crossterm_event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx.blocking_send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::error!("Failed to read console event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll console: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
