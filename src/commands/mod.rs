// =====================================================
// FILE: commands/mod.rs
// =====================================================

pub mod about;
pub mod chunk;
pub mod command;
pub mod environment;
pub mod eval;
pub mod glowstone;
pub mod handler;
pub mod help;
pub mod property;
pub mod registry;
pub mod sender;
pub mod vm;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, Context};
pub use glowstone::GlowstoneCommand;
pub use handler::{CommandHandler, CommandResult};
pub use registry::{Completion, Subcommand, SubcommandRegistry};
