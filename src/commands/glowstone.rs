use super::command::Context;
use super::registry::{Completion, SubcommandRegistry};
use crate::core::constants::{COMMAND_ALIASES, COMMAND_NAME, COMMAND_PERMISSION};
use crate::core::prelude::*;

/// The `/glowstone` (alias `/gs`) administrative command.
///
/// Both entry points are total: any argument shape yields an outcome, never
/// an error.
#[derive(Debug, Clone, Copy)]
pub struct GlowstoneCommand {
    registry: &'static SubcommandRegistry,
}

impl GlowstoneCommand {
    pub fn new() -> Self {
        Self {
            registry: SubcommandRegistry::global(),
        }
    }

    pub fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        COMMAND_ALIASES
    }

    pub fn permission(&self) -> &'static str {
        COMMAND_PERMISSION
    }

    pub fn registry(&self) -> &'static SubcommandRegistry {
        self.registry
    }

    /// Whether `label` names this command or one of its aliases.
    pub fn matches_label(&self, label: &str) -> bool {
        let collator = self.registry.collator();
        collator.equals(label, COMMAND_NAME)
            || COMMAND_ALIASES
                .iter()
                .any(|alias| collator.equals(label, alias))
    }

    /// Runs the command with the caller's own message bundle.
    pub fn execute(
        &self,
        sender: &dyn Caller,
        env: &dyn Environment,
        label: &str,
        args: &[&str],
    ) -> bool {
        let messages = Bundle::for_locale(sender.locale());
        self.execute_with(sender, &*messages, env, label, args)
    }

    /// Returns true when permission is denied, false when no subcommand
    /// matched, otherwise the subcommand's own result.
    pub fn execute_with(
        &self,
        sender: &dyn Caller,
        messages: &dyn MessageCatalog,
        env: &dyn Environment,
        label: &str,
        args: &[&str],
    ) -> bool {
        if !self.test_permission(sender, messages) {
            return true;
        }

        let Some(subcommand) = args.first().and_then(|token| self.registry.resolve(token))
        else {
            log::warn!(
                "{} used /{} with unknown subcommand {:?}",
                sender.name(),
                label,
                args.first()
            );
            self.send_usage_message(sender, messages, label);
            return false;
        };

        log::info!("{} issued /{} {}", sender.name(), label, args.join(" "));
        let ctx = Context::new(sender, messages, env);
        let success = subcommand.execute(&ctx, label, args);
        log::debug!("/{} {} -> success={}", label, subcommand, success);
        success
    }

    /// Suggestions for the last argument in `args`.
    pub fn complete(
        &self,
        sender: &dyn Caller,
        env: &dyn Environment,
        _alias: &str,
        args: &[&str],
    ) -> Vec<String> {
        let collator = self.registry.collator();

        match args {
            [partial] => self.registry.partial_matches(partial),
            [name, partial] => {
                let completion = self
                    .registry
                    .resolve(name)
                    .map_or(Completion::None, |subcommand| subcommand.completion());

                match completion {
                    Completion::WorldNames if sender.is_player() => {
                        collator.partial_matches(partial, env.world_names())
                    }
                    Completion::PropertyKeys => {
                        collator.partial_matches(partial, env.system_properties().keys())
                    }
                    Completion::WorldNames | Completion::None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn test_permission(&self, sender: &dyn Caller, messages: &dyn MessageCatalog) -> bool {
        if sender.has_permission(COMMAND_PERMISSION) {
            return true;
        }
        log::warn!("{} lacks permission {}", sender.name(), COMMAND_PERMISSION);
        sender.send_message(&format!("{}{}", ChatColor::Red, messages.permission_message()));
        false
    }

    fn send_usage_message(&self, sender: &dyn Caller, messages: &dyn MessageCatalog, label: &str) {
        messages.send_in_color(ChatColor::Red, sender, "glowstone.usage", &[label]);
    }
}

impl Default for GlowstoneCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{FixedEnvironment, RecordingSender};

    fn run(sender: &RecordingSender, args: &[&str]) -> bool {
        GlowstoneCommand::new().execute(sender, &FixedEnvironment::default(), "gs", args)
    }

    #[test]
    fn denied_is_handled_without_lookup() {
        let sender = RecordingSender::console().without_permission();
        assert!(run(&sender, &["about"]));

        let messages = sender.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("§c"));
        assert!(!messages[0].contains("Information about"));
    }

    #[test]
    fn unknown_and_empty_send_one_usage() {
        for args in [&[][..], &["nope"][..], &["wor"][..]] {
            let sender = RecordingSender::console();
            assert!(!run(&sender, args));
            assert_eq!(sender.messages().len(), 1, "args {:?}", args);
            assert!(sender.messages()[0].contains("/gs"));
        }
    }

    #[test]
    fn result_comes_from_behavior() {
        let sender = RecordingSender::console();
        assert!(run(&sender, &["WORLD"]));
        assert!(!run(&sender, &["Help"]));
        assert!(!run(&sender, &["chunk"]));
    }

    #[test]
    fn alias_matches_target() {
        for args in [&["x"][..], &["world_nether"][..], &["nether_typo"][..]] {
            for sender_fn in [RecordingSender::console, RecordingSender::player] {
                let a = sender_fn();
                let b = sender_fn();
                let mut world_args = vec!["world"];
                world_args.extend_from_slice(args);
                let mut worlds_args = vec!["worlds"];
                worlds_args.extend_from_slice(args);

                assert_eq!(run(&a, &world_args), run(&b, &worlds_args));
                assert_eq!(a.messages(), b.messages());
            }
        }
    }

    #[test]
    fn matches_name_and_alias() {
        let command = GlowstoneCommand::new();
        assert!(command.matches_label("glowstone"));
        assert!(command.matches_label("GS"));
        assert!(!command.matches_label("g"));
        assert_eq!(command.permission(), "glowstone.debug");
    }

    #[test]
    fn completes_first_argument() {
        let command = GlowstoneCommand::new();
        let env = FixedEnvironment::default();
        let sender = RecordingSender::console();
        assert_eq!(command.complete(&sender, &env, "gs", &["w"]), vec!["world", "worlds"]);
        assert_eq!(command.complete(&sender, &env, "gs", &["E"]), vec!["eval"]);
        assert_eq!(command.complete(&sender, &env, "gs", &[""]).len(), 8);
    }

    #[test]
    fn completes_world_names_for_players_only() {
        let command = GlowstoneCommand::new();
        let env = FixedEnvironment::default();

        let player = RecordingSender::player();
        assert_eq!(
            command.complete(&player, &env, "gs", &["world", ""]),
            vec!["world", "world_nether", "world_the_end"]
        );
        assert_eq!(
            command.complete(&player, &env, "gs", &["World", "WORLD_N"]),
            vec!["world_nether"]
        );
        assert!(command.complete(&player, &env, "gs", &["worlds", ""]).is_empty());

        let console = RecordingSender::console();
        assert!(command.complete(&console, &env, "gs", &["world", ""]).is_empty());

        let block = RecordingSender::block();
        assert!(block.is_physical());
        assert!(command.complete(&block, &env, "gs", &["world", ""]).is_empty());
    }

    #[test]
    fn completes_property_keys() {
        let command = GlowstoneCommand::new();
        let env = FixedEnvironment::default();
        let console = RecordingSender::console();
        assert_eq!(
            command.complete(&console, &env, "gs", &["property", "us"]),
            vec!["user.home", "user.name"]
        );
    }

    #[test]
    fn completion_degrades_to_empty() {
        let command = GlowstoneCommand::new();
        let env = FixedEnvironment::default();
        let player = RecordingSender::player();
        assert!(command.complete(&player, &env, "gs", &[]).is_empty());
        assert!(command.complete(&player, &env, "gs", &["bogus", ""]).is_empty());
        assert!(command.complete(&player, &env, "gs", &["help", ""]).is_empty());
        assert!(command
            .complete(&player, &env, "gs", &["world", "world", ""])
            .is_empty());
    }
}
