//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/cvforge/config.toml)
//! 3. Environment variables (CVFORGE_* prefix)
//!
//! Environment variables take precedence over config file values. The
//! config only seeds the editor shell (starting template, font override);
//! documents themselves are never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::style::StyleConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "CVFORGE";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Template key the editor starts from ("modern", "minimal", ...)
    #[serde(default)]
    pub template: Option<String>,

    /// Font family token overriding the template default
    #[serde(default)]
    pub font_family: Option<String>,
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (CVFORGE_TEMPLATE, CVFORGE_FONT)
    /// 2. Config file (~/.config/cvforge/config.toml or CVFORGE_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // CVFORGE_TEMPLATE
        if let Ok(val) = std::env::var(format!("{}_TEMPLATE", ENV_PREFIX)) {
            self.template = if val.is_empty() { None } else { Some(val) };
        }

        // CVFORGE_FONT
        if let Ok(val) = std::env::var(format!("{}_FONT", ENV_PREFIX)) {
            self.font_family = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with CVFORGE_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvforge")
            .join("config.toml")
    }

    /// Build the starting style configuration from this config
    ///
    /// Unknown template keys and font tokens are normalized to defaults,
    /// never errors.
    pub fn seed_style(&self) -> StyleConfig {
        let mut style = match &self.template {
            Some(template) => StyleConfig::for_template(template),
            None => StyleConfig::default(),
        };

        if let Some(token) = &self.font_family {
            match token.parse() {
                Ok(font) => style.set_font(font),
                Err(_) => {
                    tracing::warn!(font = token.as_str(), "unknown font family in config");
                }
            }
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontFamily;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap();
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &["CVFORGE_TEMPLATE", "CVFORGE_FONT", "CVFORGE_CONFIG"];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.template.is_none());
        assert!(config.font_family.is_none());
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            template = "minimal"
            font_family = "lato"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.template.as_deref(), Some("minimal"));
        assert_eq!(config.font_family.as_deref(), Some("lato"));
    }

    #[test]
    fn test_env_override_template() {
        let _guard = EnvGuard::new(ENV_VARS);

        env::set_var("CVFORGE_TEMPLATE", "creative");
        let config = Config::load_from_str("template = \"modern\"").unwrap();
        assert_eq!(config.template.as_deref(), Some("creative"));

        // Empty string clears it
        env::set_var("CVFORGE_TEMPLATE", "");
        let config = Config::load_from_str("template = \"modern\"").unwrap();
        assert!(config.template.is_none());
    }

    #[test]
    fn test_env_override_font() {
        let _guard = EnvGuard::new(ENV_VARS);

        env::set_var("CVFORGE_FONT", "merriweather");
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.font_family.as_deref(), Some("merriweather"));
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults when file doesn't exist
        assert!(config.template.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "template = \"elegant\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.template.as_deref(), Some("elegant"));
    }

    #[test]
    fn test_seed_style_known_template() {
        let config = Config {
            template: Some("minimal".to_string()),
            font_family: Some("lato".to_string()),
        };

        let style = config.seed_style();
        assert_eq!(style.preset_index(), 5);
        assert_eq!(style.font_family(), FontFamily::Lato);
    }

    #[test]
    fn test_seed_style_unknown_values_normalize() {
        let config = Config {
            template: Some("xyz".to_string()),
            font_family: Some("comic-sans".to_string()),
        };

        let style = config.seed_style();
        assert_eq!(style.preset_index(), 0);
        assert_eq!(style.font_family(), FontFamily::Inter);
    }

    #[test]
    fn test_serialization() {
        let config = Config {
            template: Some("corporate".to_string()),
            font_family: None,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("template"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.template, config.template);
        assert_eq!(parsed.font_family, config.font_family);
    }
}
