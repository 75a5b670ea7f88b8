// GUI configuration module
pub mod theme; // Palettes for every theme

// Structure for the entire application configuration loaded from JSON.
// Mirrors assets/config/default.json.
use anyhow::Context;
use engine::config::EngineSettings;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub profile: Profile,
    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// The config embedded in the binary.
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json_str(config_str).context("embedded default config is invalid")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}
