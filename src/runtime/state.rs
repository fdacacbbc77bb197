use super::eval;
use super::outbox::Outbox;
use super::player::OnlinePlayer;
use crate::core::config::{Config, ServerConfig};
use crate::core::constants::VERSION;
use crate::core::prelude::*;
use std::sync::RwLock;

/// Config-backed server state answering the environment queries of the
/// subcommands.
#[derive(Debug)]
pub struct ServerState {
    server: ServerConfig,
    worlds: Vec<WorldInfo>,
    players: RwLock<BTreeMap<String, Arc<OnlinePlayer>>>,
    properties: BTreeMap<String, String>,
    vm_arguments: Vec<String>,
}

impl ServerState {
    pub fn from_config(config: &Config, outbox: &Outbox) -> Self {
        let worlds = config
            .worlds
            .iter()
            .map(|world| {
                let [x, y, z] = world.spawn;
                WorldInfo {
                    name: world.name.clone(),
                    spawn: Location::new(world.name.clone(), x, y, z),
                }
            })
            .collect();

        let players = config
            .players
            .iter()
            .map(|player| {
                (
                    player.name.to_lowercase(),
                    Arc::new(OnlinePlayer::from_config(player, outbox.clone())),
                )
            })
            .collect();

        let properties = config
            .properties
            .iter()
            .map(|(key, value)| (key.to_lowercase(), value.clone()))
            .collect();

        Self {
            server: config.server.clone(),
            worlds,
            players: RwLock::new(players),
            properties,
            vm_arguments: std::env::args().skip(1).collect(),
        }
    }

    pub fn with_vm_arguments(mut self, arguments: Vec<String>) -> Self {
        self.vm_arguments = arguments;
        self
    }

    pub fn player(&self, name: &str) -> Option<Arc<OnlinePlayer>> {
        self.players
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&name.to_lowercase())
            .cloned()
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .map(|player| player.name().to_string())
            .collect()
    }

    pub fn join(&self, player: OnlinePlayer) -> Arc<OnlinePlayer> {
        let player = Arc::new(player);
        log::info!("{} joined", player.name());
        self.players
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(player.name().to_lowercase(), Arc::clone(&player));
        player
    }

    pub fn quit(&self, name: &str) -> Option<Arc<OnlinePlayer>> {
        let removed = self
            .players
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&name.to_lowercase());
        if removed.is_some() {
            log::info!("{} left", name);
        }
        removed
    }

    fn process_properties() -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        let mut set = |key: &str, value: String| {
            properties.insert(key.to_string(), value);
        };

        set("os.name", std::env::consts::OS.to_string());
        set("os.arch", std::env::consts::ARCH.to_string());
        set("os.family", std::env::consts::FAMILY.to_string());
        set("file.separator", std::path::MAIN_SEPARATOR.to_string());
        set(
            "path.separator",
            if cfg!(windows) { ";" } else { ":" }.to_string(),
        );
        set(
            "line.separator",
            if cfg!(windows) { "\r\n" } else { "\n" }.to_string(),
        );
        set("rust.pkg.version", VERSION.to_string());

        if let Some(user) = std::env::var_os("USER").or_else(|| std::env::var_os("USERNAME")) {
            set("user.name", user.to_string_lossy().into_owned());
        }
        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            set("user.home", home.to_string_lossy().into_owned());
        }
        if let Ok(dir) = std::env::current_dir() {
            set("user.dir", dir.display().to_string());
        }

        properties
    }
}

impl Environment for ServerState {
    fn brand(&self) -> String {
        self.server.brand.clone()
    }

    fn server_name(&self) -> String {
        self.server.name.clone()
    }

    fn version(&self) -> String {
        self.server.version.clone()
    }

    fn api_version(&self) -> String {
        self.server.api_version.clone()
    }

    fn online_players(&self) -> usize {
        self.players
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn worlds(&self) -> Vec<WorldInfo> {
        self.worlds.clone()
    }

    fn plugins(&self) -> Vec<String> {
        self.server.plugins.clone()
    }

    fn thread_count(&self) -> usize {
        std::fs::read_dir("/proc/self/task")
            .map(|tasks| tasks.count())
            .unwrap_or(1)
    }

    fn system_properties(&self) -> BTreeMap<String, String> {
        let mut properties = Self::process_properties();
        properties.extend(self.properties.clone());
        properties
    }

    fn vm_arguments(&self) -> Vec<String> {
        self.vm_arguments.clone()
    }

    fn evaluate(&self, expression: &str, sender: &dyn Caller) -> Option<String> {
        eval::evaluate(self, expression, sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML: &str = r#"
[general]
[server]
name = "Unit"
plugins = ["A"]

[[worlds]]
name = "world"
spawn = [1.0, 65.0, 1.0]

[[worlds]]
name = "world_nether"

[[players]]
name = "Steve"
world = "world"

[properties]
"Server.MOTD" = "hello"
"#;

    fn state() -> ServerState {
        let config = Config::from_toml_str(TOML).unwrap();
        ServerState::from_config(&config, &Outbox::new())
    }

    #[test]
    fn exposes_config() {
        let state = state();
        assert_eq!(state.server_name(), "Unit");
        assert_eq!(state.brand(), "Glowstone");
        assert_eq!(state.plugins(), vec!["A"]);
        assert_eq!(state.world_names(), vec!["world", "world_nether"]);
        assert_eq!(state.world("world").unwrap().spawn.y, 65.0);
        assert!(state.world("World").is_none());
        assert!(state.thread_count() >= 1);
    }

    #[test]
    fn players_join_and_quit() {
        let state = state();
        assert_eq!(state.online_players(), 1);
        assert!(state.player("steve").is_some());

        state.join(OnlinePlayer::new(
            "Alex",
            "de",
            Vec::new(),
            Location::new("world", 0.0, 0.0, 0.0),
            Outbox::new(),
        ));
        assert_eq!(state.player_names(), vec!["Alex", "Steve"]);

        assert!(state.quit("STEVE").is_some());
        assert!(state.quit("steve").is_none());
        assert_eq!(state.online_players(), 1);
    }

    #[test]
    fn properties_merge_process_and_config() {
        let state = state();
        let properties = state.system_properties();
        assert_eq!(properties.get("server.motd").map(String::as_str), Some("hello"));
        assert_eq!(properties.get("os.name").map(String::as_str), Some(std::env::consts::OS));
        assert!(properties.contains_key("user.dir"));
        assert_eq!(state.system_property("server.motd").as_deref(), Some("hello"));
    }

    #[test]
    fn process_property_keys() {
        let properties = ServerState::process_properties();
        let always = [
            "file.separator",
            "line.separator",
            "os.arch",
            "os.family",
            "os.name",
            "path.separator",
            "rust.pkg.version",
            "user.dir",
        ];
        let from_env = ["user.home", "user.name"];

        for key in always {
            assert!(properties.contains_key(key), "missing {}", key);
        }
        for key in properties.keys() {
            assert!(
                always.contains(&key.as_str()) || from_env.contains(&key.as_str()),
                "undocumented property {}",
                key
            );
        }
        assert_eq!(properties["rust.pkg.version"], VERSION);
    }

    #[test]
    fn vm_arguments_can_be_replaced() {
        let state = state().with_vm_arguments(vec!["-Xmx1G".into()]);
        assert_eq!(state.vm_arguments(), vec!["-Xmx1G"]);
    }
}
