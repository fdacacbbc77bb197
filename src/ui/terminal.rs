use crate::core::constants::APP_TITLE;
use crate::core::prelude::*;
use crossterm::{
    cursor, execute,
    style::{Print, ResetColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};
use std::io::{self, Stdout};

/// Raw-mode session for the interactive console. Restores the terminal on drop.
pub struct TerminalManager {
    stdout: Stdout,
    raw_mode_enabled: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode_enabled: false,
        }
    }

    pub fn setup(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.raw_mode_enabled = true;
        execute!(self.stdout, terminal::SetTitle(APP_TITLE), cursor::Show)?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> Result<()> {
        if !self.raw_mode_enabled {
            return Ok(());
        }
        log::debug!("Restoring terminal");

        execute!(
            self.stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            ResetColor,
            cursor::Show
        )?;
        disable_raw_mode()?;
        self.raw_mode_enabled = false;
        execute!(self.stdout, Print("\n"))?;
        Ok(())
    }
}

impl Default for TerminalManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            log::error!("Terminal cleanup failed: {}", e);
        }
    }
}
