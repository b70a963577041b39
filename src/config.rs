use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest logical icon edge accepted from the config file.
pub const MAX_ICON_SIZE: u32 = 1024;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub about: AboutConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_icon_size")]
    pub size: u32,
    #[serde(default = "default_black_threshold")]
    pub black_threshold: u8,
    #[serde(default = "default_black_ratio")]
    pub black_ratio: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    /// Page opened by the About action; without one the about text is logged.
    #[serde(default)]
    pub url: Option<String>,
}

fn default_timeout_ms() -> u64 {
    300
}

fn default_icon_size() -> u32 {
    32
}

fn default_black_threshold() -> u8 {
    48
}

fn default_black_ratio() -> f32 {
    0.75
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: default_icon_size(),
            black_threshold: default_black_threshold(),
            black_ratio: default_black_ratio(),
        }
    }
}

impl AppearanceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl IntegrationConfig {
    pub fn load() -> Result<Self> {
        let path = paths::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: IntegrationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Besides range checks, keeps the classifier settings where an inverted
    /// black glyph can never classify as black again: every channel of an
    /// inverted black pixel is at least `255 - threshold`, which exceeds the
    /// threshold below 128, and inverted images stay black on at most
    /// `1 - ratio` of their pixels, which is under the ratio above 0.5.
    fn validate(&self) -> Result<()> {
        let icons = &self.icons;
        if icons.size == 0 || icons.size > MAX_ICON_SIZE {
            anyhow::bail!("icons.size must be between 1 and {}, got {}", MAX_ICON_SIZE, icons.size);
        }
        if icons.black_threshold >= 128 {
            anyhow::bail!("icons.black_threshold must be below 128, got {}", icons.black_threshold);
        }
        if !(icons.black_ratio > 0.5 && icons.black_ratio <= 1.0) {
            anyhow::bail!("icons.black_ratio must be above 0.5 and at most 1, got {}", icons.black_ratio);
        }
        Ok(())
    }
}
