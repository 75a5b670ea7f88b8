use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named set of styling tokens applied to the whole page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Retro,
    Neon,
    Pastel,
    Sunny,
    Rainy,
    Christmas,
    Birthday,
    Eid,
    Gift,
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::Default,
        Theme::Retro,
        Theme::Neon,
        Theme::Pastel,
        Theme::Sunny,
        Theme::Rainy,
        Theme::Christmas,
        Theme::Birthday,
        Theme::Eid,
        Theme::Gift,
    ];

    /// Themes offered in the theme navigation bar. Eid is only reachable through its date range.
    pub const NAVIGABLE: [Theme; 9] = [
        Theme::Default,
        Theme::Retro,
        Theme::Neon,
        Theme::Pastel,
        Theme::Sunny,
        Theme::Rainy,
        Theme::Christmas,
        Theme::Birthday,
        Theme::Gift,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Retro => "retro",
            Theme::Neon => "neon",
            Theme::Pastel => "pastel",
            Theme::Sunny => "sunny",
            Theme::Rainy => "rainy",
            Theme::Christmas => "christmas",
            Theme::Birthday => "birthday",
            Theme::Eid => "eid",
            Theme::Gift => "gift",
        }
    }

    /// Short label shown next to the navigation icon.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "System",
            Theme::Retro => "Retro",
            Theme::Neon => "Neon",
            Theme::Pastel => "Pastel",
            Theme::Sunny => "Sunny",
            Theme::Rainy => "Rainy",
            Theme::Christmas => "Snow",
            Theme::Birthday => "Bday",
            Theme::Eid => "Eid",
            Theme::Gift => "Gift",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.id() == wanted)
            .ok_or_else(|| anyhow!("Unknown theme '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Sunny,
    Rainy,
    Cloudy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 3] = [WeatherKind::Sunny, WeatherKind::Rainy, WeatherKind::Cloudy];

    /// Theme suggested by this weather, if any. Cloudy days keep the default look.
    pub fn theme(&self) -> Option<Theme> {
        match self {
            WeatherKind::Sunny => Some(Theme::Sunny),
            WeatherKind::Rainy => Some(Theme::Rainy),
            WeatherKind::Cloudy => None,
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherKind::Sunny => "sunny",
            WeatherKind::Rainy => "rainy",
            WeatherKind::Cloudy => "cloudy",
        };
        f.write_str(name)
    }
}

/// The four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionStatus {
    /// Inputs are read-only outside of `Idle`.
    pub fn is_locked(&self) -> bool {
        !matches!(self, SubmissionStatus::Idle)
    }
}
