// src/core/config.rs
use crate::core::constants::{DEFAULT_LOG_LEVEL, VERSION};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    general: GeneralConfig,
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    worlds: Vec<WorldConfig>,
    #[serde(default)]
    players: Vec<PlayerConfig>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_language")]
    language: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_server_name")]
    name: String,
    #[serde(default = "default_brand")]
    brand: String,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default = "default_api_version")]
    api_version: String,
    #[serde(default)]
    plugins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldConfig {
    pub name: String,
    #[serde(default = "default_spawn")]
    pub spawn: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    pub world: String,
    #[serde(default = "default_spawn")]
    pub position: [f64; 3],
    #[serde(default = "default_language")]
    pub locale: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

// Default Functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}
fn default_language() -> String {
    crate::i18n::DEFAULT_LANGUAGE.into()
}
fn default_server_name() -> String {
    "Glowstone Server".into()
}
fn default_brand() -> String {
    "Glowstone".into()
}
fn default_version() -> String {
    format!("{} (admin console)", VERSION)
}
fn default_api_version() -> String {
    "1.12.2-R0.1-SNAPSHOT".into()
}
fn default_spawn() -> [f64; 3] {
    [0.0, 64.0, 0.0]
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub brand: String,
    pub version: String,
    pub api_version: String,
    pub plugins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            brand: default_brand(),
            version: default_version(),
            api_version: default_api_version(),
            plugins: Vec::new(),
        }
    }
}

impl From<ServerConfigToml> for ServerConfig {
    fn from(s: ServerConfigToml) -> Self {
        Self {
            name: s.name,
            brand: s.brand,
            version: s.version,
            api_version: s.api_version,
            plugins: s.plugins,
        }
    }
}

// Main Configuration Structure
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub log_level: String,
    pub language: String,
    pub server: ServerConfig,
    pub worlds: Vec<WorldConfig>,
    pub players: Vec<PlayerConfig>,
    pub properties: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            language: default_language(),
            server: ServerConfig::default(),
            worlds: vec![WorldConfig {
                name: "world".into(),
                spawn: default_spawn(),
            }],
            players: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        Self::from_file(&path).await
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let log_level = Self::normalize_log_level(&file.general.log_level);
        let server = file.server.map(ServerConfig::from).unwrap_or_default();

        let config = Self {
            config_path: None,
            log_level,
            language: file.general.language,
            server,
            worlds: file.worlds,
            players: file.players,
            properties: file.properties,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    fn normalize_log_level(level: &str) -> String {
        let level = level.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            log::warn!("Invalid log level '{}', using '{}'", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL.into()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.worlds.is_empty() {
            return Err(AppError::Validation("at least one [[worlds]] entry is required".into()));
        }

        let mut world_names = HashSet::new();
        for world in &self.worlds {
            if world.name.trim().is_empty() {
                return Err(AppError::Validation("world name must not be empty".into()));
            }
            if !world_names.insert(world.name.as_str()) {
                return Err(AppError::Validation(format!("duplicate world '{}'", world.name)));
            }
        }

        let mut player_names = HashSet::new();
        for player in &self.players {
            if player.name.trim().is_empty() || player.name.contains(char::is_whitespace) {
                return Err(AppError::Validation(format!(
                    "invalid player name '{}'",
                    player.name
                )));
            }
            if !player_names.insert(player.name.to_lowercase()) {
                return Err(AppError::Validation(format!("duplicate player '{}'", player.name)));
            }
            if !world_names.contains(player.world.as_str()) {
                return Err(AppError::Validation(format!(
                    "player '{}' is in unknown world '{}'",
                    player.name, player.world
                )));
            }
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        log::info!(
            "Config loaded from {}: {} world(s), {} player(s), language '{}'",
            self.config_path().unwrap_or("<memory>"),
            self.worlds.len(),
            self.players.len(),
            self.language
        );
    }
}
