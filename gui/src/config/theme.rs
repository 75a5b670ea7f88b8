// Colour tokens for each theme, applied as CSS custom properties on the page root
use serde::{Deserialize, Serialize};
use shared::models::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub glass: String,
    pub error: String,
}

impl ThemePalette {
    fn new(background: &str, foreground: &str, primary: &str, secondary: &str, accent: &str, glass: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            glass: glass.to_string(),
            error: "#ef4444".to_string(),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Default => Self::new("#0b0f19", "#e5e7eb", "#6366f1", "#1f2937", "#22d3ee", "rgba(255,255,255,0.06)"),
            Theme::Retro => Self::new("#2b1d0e", "#f4e3c1", "#e07a2f", "#5c3d1e", "#f2c14e", "rgba(244,227,193,0.08)"),
            Theme::Neon => Self::new("#05010d", "#f0f0ff", "#ff2bd6", "#1a0b2e", "#00fff0", "rgba(255,43,214,0.10)"),
            Theme::Pastel => Self::new("#fdf6ff", "#3b3551", "#b8a1ff", "#ffe3f1", "#a0e7e5", "rgba(59,53,81,0.06)"),
            Theme::Sunny => Self::new("#fff8e1", "#3e2c00", "#ffb300", "#ffe082", "#ff7043", "rgba(255,179,0,0.10)"),
            Theme::Rainy => Self::new("#1c2733", "#d6e2ee", "#5b8db8", "#2a3a4a", "#9ec9e2", "rgba(214,226,238,0.07)"),
            Theme::Christmas => Self::new("#0f1f14", "#f5f5f5", "#c62828", "#1b5e20", "#ffd54f", "rgba(245,245,245,0.08)"),
            Theme::Birthday => Self::new("#1a0f2e", "#fff4fb", "#ff6f91", "#2e1a47", "#ffc75f", "rgba(255,111,145,0.10)"),
            Theme::Eid => Self::new("#0d1b2a", "#f1faee", "#2a9d8f", "#1b263b", "#e9c46a", "rgba(233,196,106,0.08)"),
            Theme::Gift => Self::new("#1b1020", "#fbeffb", "#d81b60", "#3a1f3d", "#8bc34a", "rgba(216,27,96,0.10)"),
        }
    }

    /// Inline style declaring the palette as custom properties, e.g. `--primary: #6366f1;`.
    pub fn css_vars(&self) -> String {
        format!(
            "--background: {}; --foreground: {}; --primary: {}; --secondary: {}; --accent: {}; --glass: {}; --error: {};",
            self.background, self.foreground, self.primary, self.secondary, self.accent, self.glass, self.error
        )
    }
}
