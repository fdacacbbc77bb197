use super::outbox::Outbox;
use crate::core::config::PlayerConfig;
use crate::core::prelude::*;
use std::sync::RwLock;

/// A connected player. Messages to players are echoed on the console with a
/// `[-> name]` prefix.
#[derive(Debug)]
pub struct OnlinePlayer {
    name: String,
    locale: String,
    permissions: Vec<String>,
    location: RwLock<Location>,
    outbox: Outbox,
}

impl OnlinePlayer {
    pub fn new(
        name: impl Into<String>,
        locale: impl Into<String>,
        permissions: Vec<String>,
        location: Location,
        outbox: Outbox,
    ) -> Self {
        Self {
            name: name.into(),
            locale: locale.into(),
            permissions,
            location: RwLock::new(location),
            outbox,
        }
    }

    pub fn from_config(config: &PlayerConfig, outbox: Outbox) -> Self {
        let [x, y, z] = config.position;
        Self::new(
            config.name.clone(),
            config.locale.clone(),
            config.permissions.clone(),
            Location::new(config.world.clone(), x, y, z),
            outbox,
        )
    }

    pub fn current_location(&self) -> Location {
        self.location
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Caller for OnlinePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SenderKind {
        SenderKind::Player
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn location(&self) -> Option<Location> {
        Some(self.current_location())
    }

    /// `*` grants everything; `a.*` grants every node below `a`.
    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|granted| {
            granted == "*"
                || granted == node
                || granted
                    .strip_suffix(".*")
                    .is_some_and(|prefix| node.starts_with(&format!("{}.", prefix)))
        })
    }

    fn send_message(&self, message: &str) {
        self.outbox
            .push(format!("{}[-> {}]{} {}", ChatColor::DarkGray, self.name, ChatColor::Reset, message));
    }

    fn teleport(&self, destination: Location) -> bool {
        log::info!("Teleporting {} to {}", self.name, destination);
        *self
            .location
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = destination;
        true
    }
}
