//! Concrete collaborators backing the console binary: config-driven server
//! state, the console and online players as callers.
pub mod console;
pub mod eval;
pub mod outbox;
pub mod player;
pub mod state;

pub use console::ConsoleSender;
pub use outbox::Outbox;
pub use player::OnlinePlayer;
pub use state::ServerState;
