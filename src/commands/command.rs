use crate::commands::environment::Environment;
use crate::commands::registry::Subcommand;
use crate::commands::sender::Caller;
use crate::i18n::MessageCatalog;
use crate::ui::color::ChatColor;

/// Collaborators available to a running subcommand.
pub struct Context<'a> {
    pub sender: &'a dyn Caller,
    pub messages: &'a dyn MessageCatalog,
    pub env: &'a dyn Environment,
}

impl<'a> Context<'a> {
    pub fn new(
        sender: &'a dyn Caller,
        messages: &'a dyn MessageCatalog,
        env: &'a dyn Environment,
    ) -> Self {
        Self {
            sender,
            messages,
            env,
        }
    }

    pub fn send(&self, key: &str, params: &[&str]) {
        self.messages.send(self.sender, key, params);
    }

    pub fn send_error(&self, key: &str, params: &[&str]) {
        self.messages
            .send_in_color(ChatColor::Red, self.sender, key, params);
    }

    pub fn send_raw(&self, text: &str) {
        self.sender.send_message(text);
    }
}

/// Behavior of one subcommand.
pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    /// `args[0]` is the subcommand name exactly as typed. Returns whether the
    /// use counts as a completed action; help and error output return false.
    fn execute(&self, ctx: &Context<'_>, label: &str, args: &[&str]) -> bool;
}

/// Forwards to another subcommand with unchanged inputs.
#[derive(Debug, Clone, Copy)]
pub struct AliasCommand(pub Subcommand);

impl Command for AliasCommand {
    fn execute(&self, ctx: &Context<'_>, label: &str, args: &[&str]) -> bool {
        self.0.execute(ctx, label, args)
    }
}
