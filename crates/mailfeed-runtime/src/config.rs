use crate::fetcher::RetryPolicy;
use crate::{Error, Result};
use mailfeed_engine::{LayoutMetrics, NEAR_BOTTOM_THRESHOLD, PAGE_SIZE, Templates};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the config file path based on priority:
/// 1. Explicit path
/// 2. MAILFEED_CONFIG environment variable
/// 3. XDG config directory
/// 4. ~/.mailfeed/config.toml
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("MAILFEED_CONFIG") {
        return Ok(PathBuf::from(env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("mailfeed").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mailfeed").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub page_size: usize,
    pub near_bottom_threshold: f64,
    pub scroll_throttle_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            near_bottom_threshold: NEAR_BOTTOM_THRESHOLD,
            scroll_throttle_ms: 50,
            retry: RetryPolicy::default(),
        }
    }
}

impl FeedConfig {
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }
}

/// Optional replacements for the built-in markup templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: 300 }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: String,
    pub tab: String,
    pub feed: FeedConfig,
    pub layout: LayoutMetrics,
    pub templates: TemplateConfig,
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: "http://127.0.0.1:5000".to_string(),
            tab: "general".to_string(),
            feed: FeedConfig::default(),
            layout: LayoutMetrics::default(),
            templates: TemplateConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path(None)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Built-in templates, with any configured file taking precedence
    pub fn load_templates(&self) -> Result<Templates> {
        let mut templates = Templates::default();
        if let Some(path) = &self.templates.card {
            templates = templates.with_card(read_template(path)?);
        }
        if let Some(path) = &self.templates.section {
            templates = templates.with_section(read_template(path)?);
        }
        Ok(templates)
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read template {}: {}", path.display(), e))
    })
}
