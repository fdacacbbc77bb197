// =====================================================
// FILE: src/commands/handler.rs - CONSOLE LINE DISPATCH
// =====================================================

use super::glowstone::GlowstoneCommand;
use crate::core::prelude::*;
use crate::runtime::{ConsoleSender, OnlinePlayer, Outbox, ServerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// The label named a known command.
    pub recognized: bool,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn unrecognized() -> Self {
        Self {
            recognized: false,
            success: false,
            should_exit: false,
        }
    }
}

enum Issuer {
    Console,
    Player(Arc<OnlinePlayer>),
}

/// Turns console lines into `/glowstone` invocations and completions.
///
/// A line may start with `@<player>` to run it as that online player.
pub struct CommandHandler {
    command: GlowstoneCommand,
    state: Arc<ServerState>,
    console: ConsoleSender,
}

impl CommandHandler {
    pub fn new(state: Arc<ServerState>, console: ConsoleSender) -> Self {
        Self {
            command: GlowstoneCommand::new(),
            state,
            console,
        }
    }

    pub fn from_config(config: &Config, outbox: Outbox) -> Self {
        let state = Arc::new(ServerState::from_config(config, &outbox));
        Self::new(state, ConsoleSender::new(config.language.clone(), outbox))
    }

    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    pub fn outbox(&self) -> &Outbox {
        self.console.outbox()
    }

    pub fn handle_input(&self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return CommandResult::unrecognized();
        }

        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "stop") {
            return CommandResult {
                recognized: true,
                success: true,
                should_exit: true,
            };
        }

        let (issuer, line) = match self.split_issuer(input) {
            Ok(split) => split,
            Err(name) => {
                self.console_message("glowstone.console.unknown-player", &[name]);
                return CommandResult::unrecognized();
            }
        };
        let sender = self.caller(&issuer);

        let parts: Vec<&str> = line.trim_start_matches('/').split_whitespace().collect();
        let Some((label, args)) = parts.split_first() else {
            return CommandResult::unrecognized();
        };

        log::debug!("CommandHandler processing: '{}' as {}", line, sender.name());

        if !self.command.matches_label(label) {
            log::warn!("Unknown command: {}", label);
            Bundle::for_locale(sender.locale()).send_in_color(
                ChatColor::Red,
                sender,
                "glowstone.unknown-command",
                &[*label],
            );
            return CommandResult::unrecognized();
        }

        let success = self
            .command
            .execute(sender, &*self.state, label, args);

        CommandResult {
            recognized: true,
            success,
            should_exit: false,
        }
    }

    /// Candidates for the last (possibly empty) word of `input`.
    pub fn complete_line(&self, input: &str) -> Vec<String> {
        let (issuer, line) = match self.split_issuer(input.trim_start()) {
            Ok(split) => split,
            Err(_) => return Vec::new(),
        };
        let sender = self.caller(&issuer);

        let line = line.trim_start_matches('/');
        let mut words: Vec<&str> = line.split_whitespace().collect();
        if line.is_empty() || line.ends_with(char::is_whitespace) {
            words.push("");
        }

        match words.split_first() {
            Some((partial, [])) => {
                let labels = std::iter::once(self.command.name())
                    .chain(self.command.aliases().iter().copied());
                self.command
                    .registry()
                    .collator()
                    .partial_matches(partial, labels)
            }
            Some((label, args)) if self.command.matches_label(label) => {
                self.command
                    .complete(sender, &*self.state, label, args)
            }
            _ => Vec::new(),
        }
    }

    fn split_issuer<'a>(&self, input: &'a str) -> std::result::Result<(Issuer, &'a str), &'a str> {
        let Some(rest) = input.strip_prefix('@') else {
            return Ok((Issuer::Console, input));
        };

        let (name, line) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match self.state.player(name) {
            Some(player) => Ok((Issuer::Player(player), line.trim_start())),
            None => Err(name),
        }
    }

    fn caller<'a>(&'a self, issuer: &'a Issuer) -> &'a dyn Caller {
        match issuer {
            Issuer::Console => &self.console,
            Issuer::Player(player) => &**player,
        }
    }

    fn console_message(&self, key: &str, params: &[&str]) {
        Bundle::for_locale(self.console.locale()).send_in_color(
            ChatColor::Red,
            &self.console,
            key,
            params,
        );
    }
}
