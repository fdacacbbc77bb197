//! Read-only introspection expressions for `/gs eval`.
//!
//! Expressions are dotted paths rooted at `server`, `sender`, `world` or
//! `property`, e.g. `server.worlds`, `sender.location`,
//! `world.world_nether.spawn` or `property.os.name`. Roots and attribute
//! names are case-insensitive; world names and property keys are not.

use super::state::ServerState;
use crate::core::prelude::*;

pub fn evaluate(state: &ServerState, expression: &str, sender: &dyn Caller) -> Option<String> {
    let expression = expression.trim();
    let (root, rest) = expression.split_once('.').unwrap_or((expression, ""));

    match root.to_lowercase().as_str() {
        "null" if rest.is_empty() => None,
        "server" => server_attribute(state, rest),
        "sender" => sender_attribute(sender, rest),
        "world" => world_attribute(state, rest),
        "property" => state.system_property(&rest.to_lowercase()),
        _ => {
            log::debug!("Cannot evaluate '{}'", expression);
            None
        }
    }
}

fn server_attribute(state: &ServerState, attribute: &str) -> Option<String> {
    let value = match attribute.to_lowercase().as_str() {
        "" | "name" => state.server_name(),
        "brand" => state.brand(),
        "version" => state.version(),
        "apiversion" | "api_version" => state.api_version(),
        "worlds" => state.world_names().join(", "),
        "players" => state.player_names().join(", "),
        "onlineplayers" => state.online_players().to_string(),
        "plugins" => state.plugins().join(", "),
        "threads" => state.thread_count().to_string(),
        _ => return None,
    };
    Some(value)
}

fn sender_attribute(sender: &dyn Caller, attribute: &str) -> Option<String> {
    match attribute.to_lowercase().as_str() {
        "" | "name" => Some(sender.name().to_string()),
        "kind" => Some(format!("{:?}", sender.kind()).to_lowercase()),
        "locale" => Some(sender.locale().to_string()),
        "location" => sender.location().map(|location| location.to_string()),
        "world" => sender.location().map(|location| location.world),
        _ => None,
    }
}

fn world_attribute(state: &ServerState, path: &str) -> Option<String> {
    // world names may contain dots, so the attribute is the last segment
    let (name, attribute) = match path.rsplit_once('.') {
        Some((name, attribute)) if state.world(path).is_none() => (name, attribute),
        _ => (path, ""),
    };
    let world = state.world(name)?;

    match attribute.to_lowercase().as_str() {
        "" | "name" => Some(world.name),
        "spawn" => Some(world.spawn.to_string()),
        _ => None,
    }
}
