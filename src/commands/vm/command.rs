use crate::commands::command::{Command, Context};
use crate::ui::color::ChatColor;

#[derive(Debug)]
pub struct VmCommand;

impl Command for VmCommand {
    fn execute(&self, ctx: &Context<'_>, _label: &str, _args: &[&str]) -> bool {
        let arguments = ctx.env.vm_arguments();
        if arguments.is_empty() {
            ctx.send("glowstone.vm.empty", &[]);
            return false;
        }

        ctx.send("glowstone.vm", &[&arguments.len().to_string()]);
        for argument in &arguments {
            ctx.send_raw(&format!(
                " - '{}{}{}'.",
                ChatColor::Aqua,
                argument,
                ChatColor::Reset
            ));
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{FixedEnvironment, RecordingSender};
    use crate::core::prelude::*;

    fn run(env: &FixedEnvironment, sender: &RecordingSender) -> bool {
        let messages = Bundle::for_locale(sender.locale());
        let ctx = Context::new(sender, &*messages, env);
        VmCommand.execute(&ctx, "gs", &["vm"])
    }

    #[test]
    fn lists_arguments() {
        let sender = RecordingSender::console();
        assert!(!run(&FixedEnvironment::default(), &sender));
        assert_eq!(
            sender.messages(),
            vec![
                "The VM was started with 2 argument(s):",
                " - '§b-Xmx2G§r'.",
                " - '§b--nogui§r'.",
            ]
        );
    }

    #[test]
    fn no_arguments() {
        let env = FixedEnvironment {
            vm_arguments: Vec::new(),
            ..FixedEnvironment::default()
        };
        let sender = RecordingSender::console();
        assert!(!run(&env, &sender));
        assert_eq!(sender.messages(), vec!["The VM was started without arguments."]);
    }
}
