use super::about::AboutCommand;
use super::chunk::ChunkCommand;
use super::command::{AliasCommand, Command, Context};
use super::eval::EvalCommand;
use super::help::HelpCommand;
use super::property::PropertyCommand;
use super::vm::VmCommand;
use super::world::WorldCommand;
use crate::core::collation::Collator;
use crate::i18n::MessageCatalog;
use crate::ui::color::ChatColor;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The fixed set of `/glowstone` subcommands, in help-listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    About,
    Chunk,
    Eval,
    Help,
    Property,
    Vm,
    World,
    /// Alias for [`Subcommand::World`].
    Worlds,
}

/// How the second argument of a subcommand is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    None,
    WorldNames,
    PropertyKeys,
}

impl Subcommand {
    pub const ALL: [Subcommand; 8] = [
        Subcommand::About,
        Subcommand::Chunk,
        Subcommand::Eval,
        Subcommand::Help,
        Subcommand::Property,
        Subcommand::Vm,
        Subcommand::World,
        Subcommand::Worlds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Chunk => "chunk",
            Self::Eval => "eval",
            Self::Help => "help",
            Self::Property => "property",
            Self::Vm => "vm",
            Self::World => "world",
            Self::Worlds => "worlds",
        }
    }

    pub fn usage_key(self) -> &'static str {
        match self {
            Self::About => "glowstone.subcommand.about.usage",
            Self::Chunk => "glowstone.subcommand.chunk.usage",
            Self::Eval => "glowstone.subcommand.eval.usage",
            Self::Help => "glowstone.subcommand.help.usage",
            Self::Property => "glowstone.subcommand.property.usage",
            Self::Vm => "glowstone.subcommand.vm.usage",
            Self::World => "glowstone.subcommand.world.usage",
            Self::Worlds => "glowstone.subcommand.worlds.usage",
        }
    }

    pub fn description_key(self) -> &'static str {
        match self {
            Self::About => "glowstone.subcommand.about.description",
            Self::Chunk => "glowstone.subcommand.chunk.description",
            Self::Eval => "glowstone.subcommand.eval.description",
            Self::Help => "glowstone.subcommand.help.description",
            Self::Property => "glowstone.subcommand.property.description",
            Self::Vm => "glowstone.subcommand.vm.description",
            Self::World => "glowstone.subcommand.world.description",
            Self::Worlds => "glowstone.subcommand.worlds.description",
        }
    }

    pub fn behavior(self) -> &'static dyn Command {
        match self {
            Self::About => &AboutCommand,
            Self::Chunk => &ChunkCommand,
            Self::Eval => &EvalCommand,
            Self::Help => &HelpCommand,
            Self::Property => &PropertyCommand,
            Self::Vm => &VmCommand,
            Self::World => &WorldCommand,
            Self::Worlds => &AliasCommand(Subcommand::World),
        }
    }

    /// Second-argument completion. `worlds` executes like `world` but does
    /// not complete world names.
    pub fn completion(self) -> Completion {
        match self {
            Self::World => Completion::WorldNames,
            Self::Property => Completion::PropertyKeys,
            Self::About
            | Self::Chunk
            | Self::Eval
            | Self::Help
            | Self::Vm
            | Self::Worlds => Completion::None,
        }
    }

    pub fn execute(self, ctx: &Context<'_>, label: &str, args: &[&str]) -> bool {
        self.behavior().execute(ctx, label, args)
    }

    pub fn help_line(self, label: &str, messages: &dyn MessageCatalog) -> String {
        format!(
            "- {}/{} {}{}{}: {}",
            ChatColor::Gold,
            label,
            ChatColor::Aqua,
            messages.get(self.usage_key()),
            ChatColor::Gray,
            messages.get(self.description_key())
        )
    }

    pub fn send_help(self, ctx: &Context<'_>, label: &str) {
        ctx.send_raw(&self.help_line(label, ctx.messages));
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static REGISTRY: Lazy<SubcommandRegistry> =
    Lazy::new(|| SubcommandRegistry::new(Collator::english()));

/// Declaration-ordered catalog plus a lookup index ordered by the collator.
#[derive(Debug)]
pub struct SubcommandRegistry {
    collator: Collator,
    commands: Vec<Subcommand>,
    names: Vec<&'static str>,
    index: BTreeMap<String, Subcommand>,
}

impl SubcommandRegistry {
    pub fn new(collator: Collator) -> Self {
        let commands = Subcommand::ALL.to_vec();
        let names = commands.iter().map(|cmd| cmd.name()).collect();

        let mut index = BTreeMap::new();
        for &cmd in &commands {
            if let Some(shadowed) = index.insert(collator.fold(cmd.name()), cmd) {
                log::error!(
                    "Subcommand '{}' collides with '{}' under locale '{}'",
                    cmd,
                    shadowed,
                    collator.language()
                );
            }
        }
        debug_assert_eq!(index.len(), commands.len(), "subcommand names must be unique");

        Self {
            collator,
            commands,
            names,
            index,
        }
    }

    /// Process-wide catalog using English case folding.
    pub fn global() -> &'static SubcommandRegistry {
        &REGISTRY
    }

    pub fn resolve(&self, token: &str) -> Option<Subcommand> {
        let found = self.index.get(&self.collator.fold(token)).copied();
        log::debug!("Resolved subcommand '{}' -> {:?}", token, found);
        found
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = Subcommand> + '_ {
        self.commands.iter().copied()
    }

    /// Names starting with `partial`, in declaration order.
    pub fn partial_matches(&self, partial: &str) -> Vec<String> {
        self.collator.partial_matches(partial, self.names.iter())
    }

    pub fn collator(&self) -> &Collator {
        &self.collator
    }

    pub fn debug_info(&self) -> String {
        format!(
            "SubcommandRegistry: {} subcommands, locale: {}",
            self.commands.len(),
            self.collator.language()
        )
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for SubcommandRegistry {
    fn default() -> Self {
        Self::new(Collator::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_in_declaration_order() {
        let registry = SubcommandRegistry::default();
        assert_eq!(
            registry.names(),
            &["about", "chunk", "eval", "help", "property", "vm", "world", "worlds"]
        );
        assert_eq!(registry.len(), 8);
        assert!(!registry.is_empty());
    }

    #[test]
    fn index_has_one_entry_per_name() {
        let registry = SubcommandRegistry::default();
        assert_eq!(registry.index.len(), registry.len());
    }

    #[test]
    fn resolves_any_casing() {
        let registry = SubcommandRegistry::global();
        for cmd in Subcommand::ALL {
            let name = cmd.name();
            assert_eq!(registry.resolve(name), Some(cmd));
            assert_eq!(registry.resolve(&name.to_uppercase()), Some(cmd));

            let mixed: String = name
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            assert_eq!(registry.resolve(&mixed), Some(cmd));
        }
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        let registry = SubcommandRegistry::global();
        for token in ["", "w", "worldz", "help ", "wörld", "abouts"] {
            assert_eq!(registry.resolve(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn partial_matches_keep_declaration_order() {
        let registry = SubcommandRegistry::global();
        assert_eq!(registry.partial_matches("w"), vec!["world", "worlds"]);
        assert_eq!(registry.partial_matches("WORLDS"), vec!["worlds"]);
        assert_eq!(registry.partial_matches("").len(), 8);
        assert!(registry.partial_matches("z").is_empty());
    }

    #[test]
    fn completion_strategies_are_explicit() {
        let with_completion: Vec<_> = Subcommand::ALL
            .into_iter()
            .filter(|cmd| cmd.completion() != Completion::None)
            .collect();
        assert_eq!(with_completion, vec![Subcommand::Property, Subcommand::World]);
        assert_eq!(Subcommand::Worlds.completion(), Completion::None);
    }

    #[test]
    fn keys_follow_name() {
        for cmd in Subcommand::ALL {
            assert_eq!(
                cmd.usage_key(),
                format!("glowstone.subcommand.{}.usage", cmd.name())
            );
            assert_eq!(
                cmd.description_key(),
                format!("glowstone.subcommand.{}.description", cmd.name())
            );
        }
    }
}
