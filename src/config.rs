use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_KEY;

/// Recipe search configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Application id issued by the recipe service
    pub app_id: Option<String>,
    /// Application key issued by the recipe service
    pub app_key: Option<String>,
    /// Recipe search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Directory holding the command-line session
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,
    /// Session storage key for cached results
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            endpoint: default_endpoint(),
            session_dir: default_session_dir(),
            cache_key: default_cache_key(),
        }
    }
}

// Default value functions
fn default_endpoint() -> String {
    "https://api.edamam.com/api/recipes/v2".to_string()
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".recipe-finder")
}

fn default_cache_key() -> String {
    DEFAULT_CACHE_KEY.to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Credentials that are still unset afterwards are taken from
    /// EDAMAM_APP_ID and EDAMAM_APP_KEY.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = load_config()?;
        config.fill_credentials_from_env();
        Ok(config)
    }

    /// Both credentials, if both are present and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let app_id = self.app_id.as_deref().filter(|s| !s.trim().is_empty())?;
        let app_key = self.app_key.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((app_id, app_key))
    }

    fn fill_credentials_from_env(&mut self) {
        if self.app_id.is_none() {
            self.app_id = std::env::var("EDAMAM_APP_ID").ok();
        }
        if self.app_key.is_none() {
            self.app_key = std::env::var("EDAMAM_APP_KEY").ok();
        }
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPE_FINDER__APP_ID
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.endpoint, "https://api.edamam.com/api/recipes/v2");
        assert_eq!(config.session_dir, PathBuf::from(".recipe-finder"));
        assert_eq!(config.cache_key, "recipeSearchResults");
        assert!(config.app_id.is_none());
        assert!(config.app_key.is_none());
    }

    #[test]
    fn test_credentials_require_both() {
        let mut config = FinderConfig {
            app_id: Some("id".to_string()),
            ..Default::default()
        };
        assert!(config.credentials().is_none());

        config.app_key = Some("  ".to_string());
        assert!(config.credentials().is_none());

        config.app_key = Some("key".to_string());
        assert_eq!(config.credentials(), Some(("id", "key")));
    }

    #[test]
    fn test_load_from_environment() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("RECIPE_FINDER__") || k.starts_with("EDAMAM_"))
            .map(|(k, _)| k)
            .collect();
        for key in keys_to_clear {
            env::remove_var(&key);
        }

        env::set_var("RECIPE_FINDER__APP_ID", "prefixed-id");
        env::set_var("RECIPE_FINDER__ENDPOINT", "http://localhost:9000/search");
        env::set_var("EDAMAM_APP_ID", "plain-id");
        env::set_var("EDAMAM_APP_KEY", "plain-key");

        let result = FinderConfig::load();

        for key in [
            "RECIPE_FINDER__APP_ID",
            "RECIPE_FINDER__ENDPOINT",
            "EDAMAM_APP_ID",
            "EDAMAM_APP_KEY",
        ] {
            env::remove_var(key);
        }

        let config = result.unwrap();
        // Prefixed settings win; plain variables only fill what is unset
        assert_eq!(config.app_id.as_deref(), Some("prefixed-id"));
        assert_eq!(config.app_key.as_deref(), Some("plain-key"));
        assert_eq!(config.endpoint, "http://localhost:9000/search");
        assert_eq!(config.cache_key, "recipeSearchResults");
        assert_eq!(config.credentials(), Some(("prefixed-id", "plain-key")));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "app_id = \"abc\"\nendpoint = \"http://localhost:9000/search\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.app_id.as_deref(), Some("abc"));
        assert!(config.app_key.is_none());
        assert_eq!(config.endpoint, "http://localhost:9000/search");
        assert_eq!(config.cache_key, "recipeSearchResults");
    }
}
