pub const APP_TITLE: &str = "GLOWSTONE CONSOLE";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COMMAND_NAME: &str = "glowstone";
pub const COMMAND_ALIASES: &[&str] = &["gs"];
pub const COMMAND_PERMISSION: &str = "glowstone.debug";

pub const CONFIG_ENV_VAR: &str = "GS_CONFIG";
pub const CONFIG_FILE_NAME: &str = "glowstone.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const PROMPT: &str = "> ";
