// Engine settings, loaded from JSON (embedded default or a user file)
use serde::{Deserialize, Serialize};
use shared::models::Theme;
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::theme::calendar::{HolidayRange, MonthDay};
use crate::theme::forecast::Coordinates;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub refresh_interval_secs: u64,
    pub birthday: MonthDay,
    pub holidays: Vec<HolidayRange>,
    pub override_cycle: Vec<Theme>,
    pub contact: ContactSettings,
    pub forecast: ForecastSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactSettings {
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
    pub min_message_len: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForecastSettings {
    pub enabled: bool,
    pub endpoint: String,
    // No location means the user never granted one.
    pub location: Option<Coordinates>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            refresh_interval_secs: 3600,
            birthday: MonthDay::new_unchecked(6, 20),
            holidays: vec![
                HolidayRange::new(Theme::Christmas, MonthDay::new_unchecked(12, 20), MonthDay::new_unchecked(12, 26)),
                // Approximate; the real date moves with the lunar calendar every year.
                HolidayRange::new(Theme::Eid, MonthDay::new_unchecked(4, 20), MonthDay::new_unchecked(4, 25)),
            ],
            override_cycle: vec![Theme::Retro, Theme::Neon, Theme::Pastel],
            contact: ContactSettings::default(),
            forecast: ForecastSettings::default(),
        }
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        ContactSettings {
            submit_delay_ms: 2000,
            reset_delay_ms: 3000,
            min_message_len: 10,
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        ForecastSettings {
            enabled: false,
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            location: None,
        }
    }
}

impl EngineSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::info!("Loaded engine settings from {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_secs == 0 {
            return Err(EngineError::ConfigError("refresh_interval_secs must be greater than 0".to_string()));
        }
        if self.override_cycle.is_empty() {
            return Err(EngineError::ConfigError("override_cycle must list at least one theme".to_string()));
        }
        if self.override_cycle.contains(&Theme::Default) {
            return Err(EngineError::ConfigError(
                "override_cycle cannot contain 'default'; the cycle always ends on no override".to_string(),
            ));
        }
        if let Some((idx, dup)) = self
            .override_cycle
            .iter()
            .enumerate()
            .find(|(idx, theme)| self.override_cycle[..*idx].contains(*theme))
        {
            return Err(EngineError::ConfigError(format!(
                "override_cycle lists '{}' twice (again at position {})",
                dup, idx
            )));
        }
        if self.contact.min_message_len == 0 {
            return Err(EngineError::ConfigError("contact.min_message_len must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl ContactSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
