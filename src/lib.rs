// Module definitions
pub mod commands;
pub mod core;
pub mod i18n;
pub mod input;
pub mod runtime;
pub mod setup;
pub mod ui;

// Essential re-exports
pub use commands::{CommandHandler, CommandResult, GlowstoneCommand, Subcommand, SubcommandRegistry};
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use runtime::{Outbox, ServerState};

/// Builds a console handler whose output collects in `outbox`.
pub fn create_handler(config: &Config, outbox: Outbox) -> CommandHandler {
    CommandHandler::from_config(config, outbox)
}
