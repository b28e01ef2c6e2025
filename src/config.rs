//! Application configuration
//!
//! Layered as defaults, then `<config_dir>/mcp-directory/config.toml`,
//! then `MCP_DIRECTORY_*` environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

const ENV_API_BASE_URL: &str = "MCP_DIRECTORY_API_BASE_URL";
const ENV_CHECK_HEALTH: &str = "MCP_DIRECTORY_CHECK_HEALTH";
const ENV_SHOW_SEARCH: &str = "MCP_DIRECTORY_SHOW_SEARCH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the search backend, without trailing slash
    pub api_base_url: String,
    /// Probe `<base>/health` at startup and disable search if it fails
    pub check_health: bool,
    /// Render the search panel in the hero section
    pub show_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            check_health: false,
            show_search: true,
        }
    }
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_base_url: Option<String>,
    check_health: Option<bool>,
    show_search: Option<bool>,
}

impl Config {
    /// Load configuration, falling back to defaults on any error
    pub fn load() -> Self {
        match Self::try_load(config_path().as_deref(), |key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load from an optional file and an environment lookup.
    ///
    /// A file that cannot be read or parsed is an error. An invalid
    /// environment value is logged and skipped.
    pub fn try_load(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("Loaded config from {:?}", path);
            config.apply_file(file);
        }

        if let Some(url) = env(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url;
        }
        if let Some(check) = env_bool(&env, ENV_CHECK_HEALTH) {
            config.check_health = check;
        }
        if let Some(show) = env_bool(&env, ENV_SHOW_SEARCH) {
            config.show_search = show;
        }

        config.api_base_url = normalize_base_url(&config.api_base_url);
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(check) = file.check_health {
            self.check_health = check;
        }
        if let Some(show) = file.show_search {
            self.show_search = show;
        }
    }
}

/// `~/.config/mcp-directory/config.toml` on Linux
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mcp-directory").join("config.toml"))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn env_bool(env: &impl Fn(&str) -> Option<String>, key: &'static str) -> Option<bool> {
    let value = env(key)?;
    match parse_bool(key, &value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Ignoring environment override: {}", e);
            None
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mcp-directory-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = Config::try_load(None, env_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("mcp-directory-does-not-exist.toml");
        let config = Config::try_load(Some(&path), env_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_then_env_override() {
        let path = temp_config(
            "layering",
            "api_base_url = \"https://search.example.com/api/\"\ncheck_health = true\n",
        );
        let config = Config::try_load(
            Some(&path),
            env_from(&[(ENV_API_BASE_URL, "http://localhost:9000/api/")]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert!(config.check_health);
        assert!(config.show_search);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::try_load(
            None,
            env_from(&[(ENV_API_BASE_URL, "https://search.example.com/api//")]),
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://search.example.com/api");
    }

    #[test]
    fn test_bool_env_values() {
        let config = Config::try_load(
            None,
            env_from(&[(ENV_CHECK_HEALTH, "yes"), (ENV_SHOW_SEARCH, "0")]),
        )
        .unwrap();
        assert!(config.check_health);
        assert!(!config.show_search);

        let err = parse_bool(ENV_SHOW_SEARCH, "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key, .. } if key == ENV_SHOW_SEARCH));
    }

    #[test]
    fn test_invalid_env_value_skips_only_that_override() {
        let path = temp_config(
            "invalid-env",
            "api_base_url = \"https://search.example.com/api\"\nshow_search = false\n",
        );
        let config = Config::try_load(
            Some(&path),
            env_from(&[(ENV_CHECK_HEALTH, "maybe"), (ENV_SHOW_SEARCH, "true")]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.api_base_url, "https://search.example.com/api");
        assert!(!config.check_health);
        assert!(config.show_search);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let path = temp_config("malformed", "api_base_url = [1, 2]\n");
        let err = Config::try_load(Some(&path), env_from(&[])).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
