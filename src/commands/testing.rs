//! Recording caller and fixed environment for unit tests.
use crate::core::prelude::*;
use std::cell::RefCell;

pub struct RecordingSender {
    name: String,
    kind: SenderKind,
    locale: String,
    permitted: bool,
    teleports: bool,
    location: RefCell<Option<Location>>,
    messages: RefCell<Vec<String>>,
}

impl RecordingSender {
    fn new(name: &str, kind: SenderKind, location: Option<Location>) -> Self {
        Self {
            name: name.into(),
            kind,
            locale: "en".into(),
            permitted: true,
            teleports: true,
            location: RefCell::new(location),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn console() -> Self {
        Self::new("CONSOLE", SenderKind::Console, None)
    }

    pub fn player() -> Self {
        Self::new(
            "steve",
            SenderKind::Player,
            Some(Location::new("world", 40.5, 64.0, -17.3)),
        )
    }

    pub fn block() -> Self {
        Self::new(
            "@",
            SenderKind::Block,
            Some(Location::new("world", 3.0, 70.0, 3.0)),
        )
    }

    pub fn without_permission(mut self) -> Self {
        self.permitted = false;
        self
    }

    pub fn refusing_teleport(mut self) -> Self {
        self.teleports = false;
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Caller for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SenderKind {
        self.kind
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn location(&self) -> Option<Location> {
        self.location.borrow().clone()
    }

    fn has_permission(&self, _node: &str) -> bool {
        self.permitted
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn teleport(&self, destination: Location) -> bool {
        if self.kind != SenderKind::Player || !self.teleports {
            return false;
        }
        *self.location.borrow_mut() = Some(destination);
        true
    }
}

pub struct FixedEnvironment {
    pub worlds: Vec<WorldInfo>,
    pub properties: BTreeMap<String, String>,
    pub vm_arguments: Vec<String>,
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        let worlds = [
            ("world", 0.5),
            ("world_nether", 8.5),
            ("world_the_end", 100.5),
        ]
        .into_iter()
        .map(|(name, x)| WorldInfo {
            name: name.into(),
            spawn: Location::new(name, x, 64.0, 0.5),
        })
        .collect();

        let properties = [
            ("os.name", "Linux"),
            ("path.separator", ":"),
            ("user.home", "/home/steve"),
            ("user.name", "steve"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            worlds,
            properties,
            vm_arguments: vec!["-Xmx2G".into(), "--nogui".into()],
        }
    }
}

impl Environment for FixedEnvironment {
    fn brand(&self) -> String {
        "Glowstone".into()
    }

    fn server_name(&self) -> String {
        "Test Server".into()
    }

    fn version(&self) -> String {
        "2024.1".into()
    }

    fn api_version(&self) -> String {
        "1.12.2-R0.1".into()
    }

    fn online_players(&self) -> usize {
        3
    }

    fn worlds(&self) -> Vec<WorldInfo> {
        self.worlds.clone()
    }

    fn plugins(&self) -> Vec<String> {
        vec!["WorldEdit".into(), "Essentials".into()]
    }

    fn thread_count(&self) -> usize {
        12
    }

    fn system_properties(&self) -> BTreeMap<String, String> {
        self.properties.clone()
    }

    fn vm_arguments(&self) -> Vec<String> {
        self.vm_arguments.clone()
    }

    fn evaluate(&self, expression: &str, sender: &dyn Caller) -> Option<String> {
        match expression {
            "null" => None,
            "sender.name" => Some(sender.name().to_string()),
            other => Some(format!("<{}>", other)),
        }
    }
}
