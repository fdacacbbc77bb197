use crate::commands::command::{Command, Context};

#[derive(Debug)]
pub struct AboutCommand;

impl Command for AboutCommand {
    fn execute(&self, ctx: &Context<'_>, _label: &str, _args: &[&str]) -> bool {
        let env = ctx.env;
        ctx.send("glowstone.about", &[]);

        let facts = [
            ("glowstone.about.brand", env.brand()),
            ("glowstone.about.name", env.server_name()),
            ("glowstone.about.version", env.version()),
            ("glowstone.about.api-version", env.api_version()),
            ("glowstone.about.players", env.online_players().to_string()),
            ("glowstone.about.worlds", env.worlds().len().to_string()),
            ("glowstone.about.plugins", env.plugins().len().to_string()),
            ("glowstone.about.threads", env.thread_count().to_string()),
        ];

        for (key, value) in facts {
            let label = ctx.messages.get(key);
            ctx.send("glowstone.about._template", &[&label, &value]);
        }

        // informational only
        false
    }
}
