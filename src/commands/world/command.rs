use crate::commands::command::{Command, Context};

/// Lists worlds, or teleports a player to the spawn of the named world.
#[derive(Debug)]
pub struct WorldCommand;

impl Command for WorldCommand {
    fn execute(&self, ctx: &Context<'_>, _label: &str, args: &[&str]) -> bool {
        let Some(world_name) = args.get(1) else {
            let names = ctx.env.world_names();
            ctx.send("glowstone.worlds", &[&ctx.messages.join_list(&names)]);
            return true;
        };

        if !ctx.sender.is_player() {
            ctx.send_error("glowstone.world.not-player", &[]);
            return false;
        }

        let Some(world) = ctx.env.world(world_name) else {
            ctx.send_error("glowstone.world.invalid", &[world_name]);
            return false;
        };

        if !ctx.sender.teleport(world.spawn.clone()) {
            log::warn!("Teleport of {} to '{}' was refused", ctx.sender.name(), world.name);
            ctx.send_error("glowstone.world.failed", &[&world.name]);
            return false;
        }
        ctx.send("glowstone.world.done", &[&world.name]);
        true
    }
}
