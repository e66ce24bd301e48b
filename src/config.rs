use anyhow::{Context, Result};
use blockworld_sim::SessionConfig;
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/sandbox.toml";

/// Load a session config, falling back to defaults on any error.
pub fn load_lenient(path: &Path) -> SessionConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SessionConfig>(&contents) {
            Ok(cfg) => match cfg.validate() {
                Ok(()) => cfg,
                Err(err) => {
                    warn!("Invalid config {}: {err}. Using defaults", path.display());
                    SessionConfig::default()
                }
            },
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                SessionConfig::default()
            }
        },
        Err(err) => {
            if err.kind() == std::io::ErrorKind::NotFound {
                warn!("Config not found at {}. Using defaults", path.display());
            } else {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            }
            SessionConfig::default()
        }
    }
}

/// Load a session config, returning errors to the caller.
pub fn load_strict(path: &Path) -> Result<SessionConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: SessionConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
