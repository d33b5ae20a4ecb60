use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flightdeck_types::config::AppConfig;
use tracing::info;

/// Dotfolder name under `$HOME`.
const DOTFOLDER: &str = ".flightdeck";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the root path: `$HOME/.flightdeck/`.
pub fn root_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DOTFOLDER))
}

/// `$HOME/.flightdeck/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    Ok(root_dir()?.join(CONFIG_FILE))
}

/// Ensure the dotfolder and a default `config.toml` exist. Idempotent.
pub fn init_workspace() -> Result<()> {
    init_workspace_at(&root_dir()?)
}

/// Load the config from disk, migrating an unreadable one to defaults.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&root_dir()?)
}

/// Write the config back to disk.
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&root_dir()?, config)
}

fn init_workspace_at(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory: {}", root.display()))?;
        info!("created directory: {}", root.display());
    }

    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        save_config_to(root, &AppConfig::default())?;
        info!("created default config: {}", config_path.display());
    }

    Ok(())
}

fn load_config_from(root: &Path) -> Result<AppConfig> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        init_workspace_at(root)?;
    }

    let raw = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    match AppConfig::from_toml_str(&raw) {
        Ok(config) => Ok(config),
        Err(e) => {
            info!("config.toml unreadable ({e}), rewriting with defaults");
            let config = AppConfig::default();
            save_config_to(root, &config)?;
            Ok(config)
        }
    }
}

fn save_config_to(root: &Path, config: &AppConfig) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    let toml_str = config
        .to_toml_string()
        .context("Failed to serialize config")?;
    fs::write(&config_path, toml_str)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}
