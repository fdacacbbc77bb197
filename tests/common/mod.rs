// =====================================================
// FILE: tests/common/mod.rs - SHARED FIXTURES
// =====================================================
#![allow(dead_code)]

use glowstone_admin::core::prelude::*;
use std::cell::RefCell;

pub struct TestSender {
    pub name: String,
    pub kind: SenderKind,
    pub locale: String,
    pub permitted: bool,
    pub location: RefCell<Option<Location>>,
    pub messages: RefCell<Vec<String>>,
}

impl TestSender {
    pub fn console() -> Self {
        Self::new("CONSOLE", SenderKind::Console, None)
    }

    pub fn player(name: &str) -> Self {
        Self::new(
            name,
            SenderKind::Player,
            Some(Location::new("world", -0.5, 64.0, 31.9)),
        )
    }

    fn new(name: &str, kind: SenderKind, location: Option<Location>) -> Self {
        Self {
            name: name.into(),
            kind,
            locale: "en_US".into(),
            permitted: true,
            location: RefCell::new(location),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn denied(mut self) -> Self {
        self.permitted = false;
        self
    }

    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl Caller for TestSender {
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

    fn has_permission(&self, node: &str) -> bool {
        self.permitted && node == "glowstone.debug"
    }

    fn send_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn teleport(&self, destination: Location) -> bool {
        if self.kind != SenderKind::Player {
            return false;
        }
        *self.location.borrow_mut() = Some(destination);
        true
    }
}

pub struct TestEnvironment {
    pub worlds: Vec<WorldInfo>,
    pub properties: BTreeMap<String, String>,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        let worlds = ["world", "world_nether", "Skyblock"]
            .into_iter()
            .map(|name| WorldInfo {
                name: name.into(),
                spawn: Location::new(name, 0.5, 80.0, 0.5),
            })
            .collect();
        let properties = [("java.version", "17"), ("os.name", "Linux")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { worlds, properties }
    }
}

impl Environment for TestEnvironment {
    fn brand(&self) -> String {
        "Glowstone".into()
    }

    fn server_name(&self) -> String {
        "Integration".into()
    }

    fn version(&self) -> String {
        "test".into()
    }

    fn api_version(&self) -> String {
        "1.12.2".into()
    }

    fn online_players(&self) -> usize {
        1
    }

    fn worlds(&self) -> Vec<WorldInfo> {
        self.worlds.clone()
    }

    fn plugins(&self) -> Vec<String> {
        Vec::new()
    }

    fn thread_count(&self) -> usize {
        4
    }

    fn system_properties(&self) -> BTreeMap<String, String> {
        self.properties.clone()
    }

    fn vm_arguments(&self) -> Vec<String> {
        Vec::new()
    }

    fn evaluate(&self, expression: &str, _sender: &dyn Caller) -> Option<String> {
        Some(expression.to_string())
    }
}
