use crate::metrics::{
    DEFAULT_DURATION_MONTHS, DEFAULT_WEEKLY_HOURS_POOL, MAX_DURATION_MONTHS, MIN_DURATION_MONTHS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Placeholder shipped in sample `.env` files; treated the same as no key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration for BizPlan
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BizPlanConfig {
    /// Completion API settings for the pitch generator
    #[serde(default)]
    pub llm: LLMConfig,

    /// Resource planner defaults
    #[serde(default)]
    pub planning: PlanningConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Completion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// API key; absent or placeholder selects the offline sample pitch
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LLMConfig {
    /// The configured key, unless it is missing, blank or the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resource planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Organisation-wide weekly hours shared by the team
    #[serde(default = "default_weekly_hours_pool")]
    pub weekly_hours_pool: f64,

    /// Initial project duration in months
    #[serde(default = "default_duration_months")]
    pub default_duration_months: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            weekly_hours_pool: default_weekly_hours_pool(),
            default_duration_months: default_duration_months(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_max_tokens() -> usize {
    1500
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_weekly_hours_pool() -> f64 {
    DEFAULT_WEEKLY_HOURS_POOL
}
fn default_duration_months() -> u32 {
    DEFAULT_DURATION_MONTHS
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

/// Configuration manager: environment over config file over defaults.
pub struct ConfigManager {
    config: BizPlanConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with the following precedence:
    /// 1. Environment variables (.env file)
    /// 2. Config file (.bizplan.toml)
    /// 3. Sensible defaults
    pub fn load() -> Result<Self, ConfigError> {
        info!("Loading BizPlan configuration");

        Self::load_dotenv();

        let (config, config_path) = Self::load_config_file()?;
        let config = Self::apply_env_overrides(config);
        Self::validate_config(&config)?;

        info!(
            config_file = ?config_path,
            model = %config.llm.model,
            online = config.llm.usable_api_key().is_some(),
            "Configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Load from an explicit file, still honouring .env and environment
    /// overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_dotenv();

        let config = Self::apply_env_overrides(Self::read_toml_file(path)?);
        Self::validate_config(&config)?;
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already-built configuration.
    pub fn from_config(config: BizPlanConfig) -> Result<Self, ConfigError> {
        Self::validate_config(&config)?;
        Ok(Self {
            config,
            config_path: None,
        })
    }

    /// Load .env file if it exists
    fn load_dotenv() {
        if Path::new(".env").exists() {
            if let Err(e) = dotenv::from_filename(".env") {
                warn!("Failed to load .env file: {}", e);
            } else {
                info!("Loaded .env file from current directory");
            }
            return;
        }

        if let Some(home) = dirs::home_dir() {
            let home_env = home.join(".bizplan.env");
            if home_env.exists() {
                if let Err(e) = dotenv::from_path(&home_env) {
                    warn!("Failed to load .bizplan.env: {}", e);
                } else {
                    info!("Loaded .bizplan.env from home directory");
                }
            }
        }
    }

    /// Find and load config file
    /// Search order:
    /// 1. ./.bizplan.toml (current directory)
    /// 2. ~/.bizplan/config.toml (user config)
    /// 3. Use defaults
    fn load_config_file() -> Result<(BizPlanConfig, Option<PathBuf>), ConfigError> {
        let local_config = Path::new(".bizplan.toml");
        if local_config.exists() {
            let config = Self::read_toml_file(local_config)?;
            return Ok((config, Some(local_config.to_path_buf())));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".bizplan").join("config.toml");
            if user_config.exists() {
                let config = Self::read_toml_file(&user_config)?;
                return Ok((config, Some(user_config)));
            }
        }

        info!("No config file found, using defaults");
        Ok((BizPlanConfig::default(), None))
    }

    fn read_toml_file(path: &Path) -> Result<BizPlanConfig, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn apply_env_overrides(config: BizPlanConfig) -> BizPlanConfig {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup. Blank values count as unset and
    /// unparseable numbers are ignored.
    fn apply_overrides(
        mut config: BizPlanConfig,
        raw_lookup: impl Fn(&str) -> Option<String>,
    ) -> BizPlanConfig {
        let lookup = |key: &str| raw_lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = lookup("OPENAI_API_KEY").or_else(|| lookup("VITE_OPENAI_API_KEY")) {
            config.llm.api_key = Some(key);
        }
        if let Some(url) = lookup("BIZPLAN_LLM_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Some(model) = lookup("BIZPLAN_MODEL") {
            config.llm.model = model;
        }
        if let Some(temp) = lookup("BIZPLAN_TEMPERATURE") {
            if let Ok(t) = temp.parse() {
                config.llm.temperature = t;
            }
        }
        if let Some(hours) = lookup("BIZPLAN_WEEKLY_HOURS") {
            if let Ok(h) = hours.parse() {
                config.planning.weekly_hours_pool = h;
            }
        }

        // Logging. Full filter directives are left to the subscriber.
        if let Some(level) = lookup("RUST_LOG") {
            let level = level.trim().to_lowercase();
            if matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
                config.logging.level = level;
            }
        }

        config
    }

    fn validate_config(config: &BizPlanConfig) -> Result<(), ConfigError> {
        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    other
                )))
            }
        }

        match config.logging.format.as_str() {
            "pretty" | "json" | "compact" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {}. Must be one of: pretty, json, compact",
                    other
                )))
            }
        }

        if !(0.0..=2.0).contains(&config.llm.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                config.llm.temperature
            )));
        }

        if !(config.planning.weekly_hours_pool > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid weekly hours pool: {}. Must be positive",
                config.planning.weekly_hours_pool
            )));
        }

        let duration = config.planning.default_duration_months;
        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&duration) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid default duration: {} months. Must be between {} and {}",
                duration, MIN_DURATION_MONTHS, MAX_DURATION_MONTHS
            )));
        }

        Ok(())
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &BizPlanConfig {
        &self.config
    }

    /// Get the path to the config file that was loaded, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Create a default config file
    pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        let config = BizPlanConfig::default();
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        }

        std::fs::write(path, toml_str).map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Ok(())
    }
}
