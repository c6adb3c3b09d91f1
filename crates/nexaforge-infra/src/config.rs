//! Forge configuration loader for NexaForge.
//!
//! Reads `forge.toml` from the data directory (`~/.nexaforge/` in production)
//! and deserializes it into [`ForgeConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use nexaforge_types::config::ForgeConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "NEXAFORGE_DATA_DIR";

/// Load forge configuration from `{data_dir}/forge.toml`.
///
/// - If the file does not exist, returns [`ForgeConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_forge_config(data_dir: &Path) -> ForgeConfig {
    let config_path = data_dir.join("forge.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No forge.toml found at {}, using defaults", config_path.display());
            return ForgeConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ForgeConfig::default();
        }
    };

    match toml::from_str::<ForgeConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ForgeConfig::default()
        }
    }
}

/// Resolve the data directory.
///
/// Priority: `NEXAFORGE_DATA_DIR`, then `~/.nexaforge`, then `./.nexaforge`
/// when no home directory can be determined.
pub fn resolve_data_dir() -> PathBuf {
    resolve_data_dir_from(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

fn resolve_data_dir_from(env_override: Option<PathBuf>) -> PathBuf {
    match env_override {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nexaforge"),
    }
}

/// SQLite URL for the blueprint database inside `data_dir`.
pub fn database_url(data_dir: &Path) -> String {
    format!("sqlite://{}/nexaforge.db?mode=rwc", data_dir.display())
}
