//! Configuration management for the review widget.
//!
//! Configuration is read from `~/.config/review-widget/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://cdn.yextapis.com/v2/accounts/me";
pub const DEFAULT_ENTITY_VERSION: &str = "20231030";
pub const DEFAULT_REVIEWS_VERSION: &str = "20231019";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub widget: WidgetSettings,
    /// Extra publisher icons, keyed by publisher id.
    pub publishers: BTreeMap<String, String>,
}

/// Content API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    /// `v` parameter sent with the entity request
    pub entity_version: String,
    /// `v` parameter sent with the reviews request
    pub reviews_version: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            entity_version: DEFAULT_ENTITY_VERSION.to_string(),
            reviews_version: DEFAULT_REVIEWS_VERSION.to_string(),
            user_agent: concat!("review-widget/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Entity used when none is given on the command line
    pub entity_id: Option<String>,
    pub page_title: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            entity_id: None,
            page_title: "Customer Reviews".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/review-widget/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("review-widget").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# Review Widget Configuration

[api]
# Content API account root
base_url = "{DEFAULT_BASE_URL}"

# API key; REVIEW_WIDGET_API_KEY or --api-key take precedence
api_key = ""

# Version dates sent as the `v` query parameter
entity_version = "{DEFAULT_ENTITY_VERSION}"
reviews_version = "{DEFAULT_REVIEWS_VERSION}"

[widget]
# Default entity, used when --entity-id is not given
# entity_id = "my-location"

# Title of the generated host page
page_title = "Customer Reviews"

[publishers]
# Additional or replacement publisher icons
# YELP = "https://example.com/icons/yelp.svg"
"##
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
