use crate::commands::command::{Command, Context};
use crate::commands::registry::SubcommandRegistry;

/// Lists every subcommand's usage and description. Reads only metadata.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ctx: &Context<'_>, label: &str, _args: &[&str]) -> bool {
        for subcommand in SubcommandRegistry::global().iter() {
            subcommand.send_help(ctx, label);
        }
        false
    }
}
