use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL; every endpoint path is appended to it.
    pub api_base_url: String,
    /// Where the persisted session blob lives. Defaults to the data dir.
    pub storage_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_path: None,
        }
    }
}

impl AppConfig {
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| app_data_dir().join("storage.json"))
    }
}

/// Read the config file, then apply environment overrides. A missing or
/// unreadable file yields the defaults.
pub fn load_config() -> AppConfig {
    let path = config_path();
    let mut config = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed config {}: {}", path.display(), err);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };
    apply_env_overrides(&mut config);
    config
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, contents)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(url) = std::env::var("ESTATE_ADMIN_API_URL")
        && !url.trim().is_empty()
    {
        config.api_base_url = url.trim().to_string();
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ESTATE_ADMIN_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("ESTATE_ADMIN_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("EstateAdmin");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("EstateAdmin");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("estate-admin");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("estate-admin");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".estate-admin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(r#"storage_path = "/tmp/s.json""#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig {
            api_base_url: "https://admin.example.com/api".into(),
            storage_path: None,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), config);
    }
}
