use crate::commands::command::{Command, Context};

#[derive(Debug)]
pub struct PropertyCommand;

impl Command for PropertyCommand {
    fn execute(&self, ctx: &Context<'_>, _label: &str, args: &[&str]) -> bool {
        match args.get(1) {
            None => {
                for (key, value) in ctx.env.system_properties() {
                    ctx.send("glowstone.property", &[&key, &value]);
                }
            }
            Some(key) => {
                let key = key.to_lowercase();
                match ctx.env.system_property(&key) {
                    Some(value) => ctx.send("glowstone.property", &[&key, &value]),
                    None => ctx.send_error("glowstone.property.invalid", &[&key]),
                }
            }
        }
        false
    }
}
