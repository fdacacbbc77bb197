use crate::commands::command::{Command, Context};
use crate::commands::registry::Subcommand;

#[derive(Debug)]
pub struct EvalCommand;

impl Command for EvalCommand {
    fn execute(&self, ctx: &Context<'_>, label: &str, args: &[&str]) -> bool {
        if args.len() <= 1 {
            Subcommand::Eval.send_help(ctx, label);
            return false;
        }

        let expression = args[1..].join(" ");
        log::debug!("{} evaluates '{}'", ctx.sender.name(), expression);

        match ctx.env.evaluate(&expression, ctx.sender) {
            Some(result) => ctx.send("glowstone.eval", &[&result]),
            None => ctx.send("glowstone.eval.null", &[]),
        }
        true
    }
}
