use crate::llm::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub llm: LLMConfig,
    pub ui: UIConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LLMConfig {
    pub provider: String,
    pub model: String,
    pub api_key_env: String,
    pub api_base: String,
    pub timeout_seconds: u64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UIConfig {
    pub tick_ms: u64,
    /// Where the generated page is saved from the result screen
    pub output_file: PathBuf,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("sitecraft"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        config.validate()?;

        Ok(config)
    }

    /// Load the config file if there is one, defaults otherwise
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default_config());
        }
        Self::load_from(&path)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Validate before saving
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            llm: LLMConfig {
                provider: "gemini".to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                api_base: DEFAULT_API_BASE.to_string(),
                timeout_seconds: 120,
                max_output_tokens: 8000,
            },
            ui: UIConfig {
                tick_ms: 100,
                output_file: PathBuf::from("index.html"),
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.provider != "gemini" {
            return Err(ConfigError::InvalidValue(format!(
                "Unsupported LLM provider: {}. Only 'gemini' is supported",
                self.llm.provider
            )));
        }

        if !self.llm.model.starts_with("gemini-") {
            return Err(ConfigError::InvalidValue(format!(
                "Invalid model name: {}. Must be a Gemini model",
                self.llm.model
            )));
        }

        if self.llm.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_output_tokens == 0 {
            return Err(ConfigError::InvalidValue(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "tick_ms must be greater than 0".to_string(),
            ));
        }

        if self.ui.output_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.llm.max_output_tokens, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_provider() {
        let mut config = Config::default_config();
        config.llm.provider = "openai".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_model() {
        let mut config = Config::default_config();
        config.llm.model = "gpt-4".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_values() {
        let mut config = Config::default_config();
        config.ui.tick_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.llm.max_output_tokens = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.ui.output_file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default_config();
        config.llm.model = "gemini-2.5-pro".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        Config::default_config().save_to(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let text = toml::to_string(&Config::default_config())
            .unwrap()
            .replace("gemini-2.5-flash", "claude-3");
        fs::write(&path, text).unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::InvalidValue(_))));
    }
}
