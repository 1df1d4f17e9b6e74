use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

/// Environment variable holding the generation service API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Settings for the external text-generation provider.
/// Temperature is not configurable; generation always runs at 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub llm_api_key: Option<String>,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            llm_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file, substituting `${VAR}` references
    /// from the process environment.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let content = substitute_env_vars(&content, |name| std::env::var(name).ok());
        let config = Self::parse(path, &content)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    /// Find and load the first available config file, falling back to defaults,
    /// then apply `HOST`/`PORT` overrides from the environment.
    pub fn discover() -> Result<Self> {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let candidates: Vec<String> = explicit
            .clone()
            .into_iter()
            .chain(["conf.yaml".to_string(), "conf.json".to_string()])
            .collect();

        let mut config = None;
        for path in &candidates {
            if Path::new(path).exists() {
                config = Some(Self::load(path)?);
                debug!("Loaded configuration from: {}", path);
                break;
            }
            if explicit.as_deref() == Some(path.as_str()) {
                anyhow::bail!("Configuration file not found: {}", path);
            }
        }

        let mut config = config.unwrap_or_else(|| {
            debug!("No configuration file found, using defaults. Tried: {:?}", candidates);
            Self::default()
        });
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.system_config.request_timeout_secs == 0 {
            anyhow::bail!("system_config.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("HOST") {
            self.system_config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.system_config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?;
        }
        Ok(())
    }

    /// Resolve the provider API key. A missing key is fatal at startup.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        self.llm_config
            .llm_api_key
            .clone()
            .filter(|key| !key.trim().is_empty() && !key.contains("${"))
            .or_else(|| lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| anyhow::anyhow!("{} is not set; refusing to start", API_KEY_ENV))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.system_config.request_timeout_secs)
    }
}

/// Replace `${VAR_NAME}` references. Unknown variables are left untouched.
fn substitute_env_vars(content: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("env var pattern is valid");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
