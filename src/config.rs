use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Gateway configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Base URL of the scraper service that performs the extraction
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            upstream_url: default_upstream_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "127.0.0.1:8081".to_string()
}

fn default_upstream_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with GATEWAY__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: GATEWAY__UPSTREAM_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_listen_addr(), "127.0.0.1:8081");
        assert_eq!(default_upstream_url(), "http://127.0.0.1:8000");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_settings_default_matches_field_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.listen_addr, default_listen_addr());
        assert_eq!(settings.upstream_url, default_upstream_url());
        assert_eq!(settings.timeout, default_timeout());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("GATEWAY__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        let settings = Settings::load().unwrap();
        assert_eq!(settings.upstream_url, default_upstream_url());
        assert_eq!(settings.listen_addr, default_listen_addr());
        assert_eq!(settings.timeout, default_timeout());
    }
}
