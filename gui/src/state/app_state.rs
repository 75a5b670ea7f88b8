// Reactive page state. The engine services own the real state; these signals mirror
// their published snapshots so components can read them without touching the services.

use dioxus::prelude::*;
use engine::contact::ContactSnapshot;
use engine::theme::{ForecastStatus, ThemeSnapshot};
use shared::models::Theme;
use shared::utils::is_mobile_width;

use crate::config::theme::ThemePalette;

#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<ThemeSnapshot>,
    pub contact: Signal<ContactSnapshot>,
    pub forecast: Signal<ForecastStatus>,
    pub window_width: Signal<f64>,
}

impl AppState {
    /// Must be called from inside a component or hook.
    pub fn new(theme: ThemeSnapshot, contact: ContactSnapshot, window_width: f64) -> Self {
        Self {
            theme: Signal::new(theme),
            contact: Signal::new(contact),
            forecast: Signal::new(ForecastStatus::default()),
            window_width: Signal::new(window_width),
        }
    }

    pub fn active_theme(&self) -> Theme {
        self.theme.read().active_theme
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_theme(self.active_theme())
    }

    pub fn is_mobile(&self) -> bool {
        is_mobile_width(*self.window_width.read())
    }
}
