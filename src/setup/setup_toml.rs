// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides this)
log_level = "info"
# language of the console: en | de
language = "en"

[server]
name = "Glowstone Server"
brand = "Glowstone"
plugins = []

[[worlds]]
name = "world"
spawn = [0.5, 64.0, 0.5]

[[worlds]]
name = "world_nether"
spawn = [8.5, 70.0, 8.5]

[[worlds]]
name = "world_the_end"
spawn = [100.5, 49.0, 0.5]

# Players listed here are online from startup. Run a line as a player with
#   @steve gs world world_nether
[[players]]
name = "steve"
world = "world"
position = [12.5, 64.0, -40.5]
locale = "en"
permissions = ["glowstone.*"]

[properties]
"server.motd" = "A Glowstone server"
"#;

/// Writes the default config to the working directory unless one exists.
pub async fn ensure_config_exists() -> Result<PathBuf> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG).await?;
        log::info!("Created default config at {}", config_path.display());
    }
    Ok(config_path)
}

/// Candidate config locations, most specific first.
pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths.push(PathBuf::from("config").join(CONFIG_FILE_NAME));
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_FILE_NAME));
        }
    }
    paths
}
