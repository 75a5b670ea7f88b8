// Automatic theme computation and user overrides
use chrono::{Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use shared::models::{Theme, WeatherKind};

use super::calendar::ThemeCalendar;
use super::weather::WeatherSource;
use crate::config::EngineSettings;

/// Key that steps through the override cycle.
pub const CYCLE_KEY: char = 'w';

/// Birthday beats holidays, holidays beat weather, weather beats the default.
pub fn compute_automatic_theme(calendar: &ThemeCalendar, today: NaiveDate, weather: WeatherKind) -> Theme {
    if calendar.is_birthday(today) {
        return Theme::Birthday;
    }
    if let Some(holiday) = calendar.holiday_on(today) {
        return holiday;
    }
    weather.theme().unwrap_or(Theme::Default)
}

/// Everything the page needs to know about the current theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeSnapshot {
    pub active_theme: Theme,
    pub automatic_theme: Theme,
    /// `None` until the first refresh.
    pub weather_sample: Option<WeatherKind>,
    pub is_birthday: bool,
    pub holiday: Option<Theme>,
    pub user_override: Option<Theme>,
}

impl ThemeSnapshot {
    /// Theme highlighted in the navigation bar: the override, or "default" when none is set.
    pub fn navigation_theme(&self) -> Theme {
        self.user_override.unwrap_or(Theme::Default)
    }
}

pub struct ThemeSelector {
    calendar: ThemeCalendar,
    weather: Box<dyn WeatherSource>,
    override_cycle: Vec<Theme>,
    today: fn() -> NaiveDate,
    state: ThemeSnapshot,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl ThemeSelector {
    pub fn new(calendar: ThemeCalendar, weather: Box<dyn WeatherSource>, override_cycle: Vec<Theme>) -> Self {
        Self {
            calendar,
            weather,
            override_cycle,
            today: local_today,
            state: ThemeSnapshot::default(),
        }
    }

    pub fn from_settings(settings: &EngineSettings, weather: Box<dyn WeatherSource>) -> Self {
        let calendar = ThemeCalendar::new(settings.birthday, settings.holidays.clone());
        Self::new(calendar, weather, settings.override_cycle.clone())
    }

    /// Replaces the wall clock used by [`ThemeSelector::refresh`].
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn active_theme(&self) -> Theme {
        self.state.active_theme
    }

    pub fn user_override(&self) -> Option<Theme> {
        self.state.user_override
    }

    pub fn snapshot(&self) -> &ThemeSnapshot {
        &self.state
    }

    pub fn override_cycle(&self) -> &[Theme] {
        &self.override_cycle
    }

    /// Number of stops in one full cycle, counting the trailing "no override" slot.
    pub fn cycle_len(&self) -> usize {
        self.override_cycle.len() + 1
    }

    /// Re-samples the weather and re-checks today's date.
    pub fn refresh(&mut self) -> Theme {
        let today = (self.today)();
        self.refresh_on(today)
    }

    pub fn refresh_on(&mut self, today: NaiveDate) -> Theme {
        let weather = self.weather.sample();
        let holiday = self.calendar.holiday_on(today);
        let is_birthday = self.calendar.is_birthday(today);
        let automatic = compute_automatic_theme(&self.calendar, today, weather);

        tracing::debug!(%today, %weather, automatic = %automatic, "theme refresh");

        self.state.weather_sample = Some(weather);
        self.state.holiday = holiday;
        self.state.is_birthday = is_birthday;
        self.state.automatic_theme = automatic;
        self.apply();
        self.state.active_theme
    }

    /// `None` and `Some(Theme::Default)` both clear the override.
    pub fn set_override(&mut self, theme: Option<Theme>) {
        self.state.user_override = theme.filter(|t| *t != Theme::Default);
        self.apply();
    }

    /// Steps through the override cycle, ending on "no override" before starting over.
    /// An override set outside the cycle restarts it from the first entry.
    pub fn cycle_override(&mut self) -> Option<Theme> {
        let next = match self.state.user_override {
            None => self.override_cycle.first().copied(),
            Some(current) => match self.override_cycle.iter().position(|t| *t == current) {
                Some(idx) => self.override_cycle.get(idx + 1).copied(),
                None => self.override_cycle.first().copied(),
            },
        };
        self.set_override(next);
        self.state.user_override
    }

    /// Jumps to a random navigable theme other than the one currently highlighted.
    pub fn pick_random_override<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Theme> {
        let current = self.state.navigation_theme();
        let candidates: Vec<Theme> = Theme::NAVIGABLE.iter().copied().filter(|t| *t != current).collect();
        let pick = candidates.choose(rng).copied();
        self.set_override(pick);
        self.state.user_override
    }

    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.eq_ignore_ascii_case(&CYCLE_KEY) => {
                self.cycle_override();
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self) {
        self.state.active_theme = self.state.user_override.unwrap_or(self.state.automatic_theme);
    }
}
