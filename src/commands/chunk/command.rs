use crate::commands::command::{Command, Context};

#[derive(Debug)]
pub struct ChunkCommand;

impl Command for ChunkCommand {
    fn execute(&self, ctx: &Context<'_>, _label: &str, _args: &[&str]) -> bool {
        let Some(location) = ctx.sender.location() else {
            ctx.send_error("glowstone.not-physical", &[]);
            return false;
        };

        ctx.send(
            "glowstone.chunk",
            &[
                &location.chunk_x().to_string(),
                &location.chunk_z().to_string(),
            ],
        );
        true
    }
}
