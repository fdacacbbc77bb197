use crate::commands::sender::{Caller, Location};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct WorldInfo {
    pub name: String,
    pub spawn: Location,
}

/// Live server state queried by subcommand behaviors. Every call reads a
/// fresh snapshot.
pub trait Environment {
    fn brand(&self) -> String;

    fn server_name(&self) -> String;

    fn version(&self) -> String;

    fn api_version(&self) -> String;

    fn online_players(&self) -> usize;

    fn worlds(&self) -> Vec<WorldInfo>;

    fn world(&self, name: &str) -> Option<WorldInfo> {
        self.worlds().into_iter().find(|world| world.name == name)
    }

    fn world_names(&self) -> Vec<String> {
        self.worlds().into_iter().map(|world| world.name).collect()
    }

    fn plugins(&self) -> Vec<String>;

    fn thread_count(&self) -> usize;

    fn system_properties(&self) -> BTreeMap<String, String>;

    fn system_property(&self, key: &str) -> Option<String> {
        self.system_properties().remove(key)
    }

    fn vm_arguments(&self) -> Vec<String>;

    /// Evaluates an introspection expression on behalf of `sender`.
    /// `None` stands for a null result.
    fn evaluate(&self, expression: &str, sender: &dyn Caller) -> Option<String>;
}
