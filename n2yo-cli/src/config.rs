use n2yo_client::{ClientConfig, DEFAULT_BASE_URL, Location};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "n2yo.toml";

const API_KEY_VAR: &str = "N2YO_API_KEY";
const API_URL_VAR: &str = "N2YO_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write daily log files here in addition to stderr
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Default observer location
    #[serde(default)]
    pub location: Option<Location>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            log_level: default_log_level(),
            log_dir: None,
            location: None,
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the TOML file (an explicit path must exist, the default one is
    /// optional), then `.env`, then the process environment.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config file {}: {}", path, e))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };

        dotenv::dotenv().ok();
        config.apply_env(|name| std::env::var(name).ok());

        Ok(config)
    }

    /// Override the key and base URL from `N2YO_API_KEY` / `N2YO_API_URL`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(api_key) = lookup(API_KEY_VAR).filter(|v| !v.is_empty()) {
            self.api_key = api_key;
        }
        if let Some(base_url) = lookup(API_URL_VAR).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            default_location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            api_key = "ABCD-1234"
            log_level = "debug"
            log_dir = "logs"

            [location]
            latitude = 41.702
            longitude = -76.014
            altitude_meters = 120.0
        "#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_key, "ABCD-1234");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_dir.as_deref(), Some("logs"));
        assert_eq!(config.location, Some(Location::new(41.702, -76.014, 120.0)));
    }

    #[test]
    fn test_location_needs_altitude() {
        let toml_str = r#"
            [location]
            latitude = 41.702
            longitude = -76.014
        "#;
        assert!(toml::from_str::<CliConfig>(toml_str).is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("N2YO_API_KEY", "FROM-ENV"),
            ("N2YO_API_URL", "http://localhost:8080/satellite/"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig {
            api_key: "FROM-FILE".to_string(),
            ..CliConfig::default()
        };
        config.apply_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key, "FROM-ENV");
        assert_eq!(config.base_url, "http://localhost:8080/satellite/");
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let mut config = CliConfig {
            api_key: "FROM-FILE".to_string(),
            ..CliConfig::default()
        };
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.api_key, "FROM-FILE");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_config_carries_location() {
        let config = CliConfig {
            api_key: "KEY".to_string(),
            location: Some(Location::new(1.0, 2.0, 3.0)),
            ..CliConfig::default()
        };
        let client_config = config.client_config();
        assert_eq!(client_config.api_key, "KEY");
        assert_eq!(client_config.base_url, DEFAULT_BASE_URL);
        assert_eq!(client_config.default_location, Some(Location::new(1.0, 2.0, 3.0)));
    }
}
