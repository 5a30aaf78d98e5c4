//! Config file handling

use std::path::{Path, PathBuf};

use crate::errors::RbdlError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "RBDL_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";

/// rbdl configuration
///
/// ```toml
/// [defaults]
/// options = ["--email=user@example.com", "--format=csv"]
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Flags prepended to the command line
    pub default_options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, RbdlError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from `config_dir`
    pub fn load_from(config_dir: &Path) -> Result<Self, RbdlError> {
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                default_options: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| RbdlError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content, config_dir)
    }

    fn parse(content: &str, config_dir: &Path) -> Result<Self, RbdlError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| RbdlError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|p| p.join("rbdl"))
            .unwrap_or_else(|| PathBuf::from(".rbdl"))
    }

    /// Path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}
