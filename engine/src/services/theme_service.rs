// Owns the theme selector, refreshes it on a timer and publishes snapshots
use shared::models::Theme;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tracing::info;

use super::publish;
use crate::scheduler::{spawn_interval, TaskHandle};
use crate::theme::{ThemeSelector, ThemeSnapshot};

pub struct ThemeService {
    selector: Arc<RwLock<ThemeSelector>>,
    updates: Arc<watch::Sender<ThemeSnapshot>>,
    refresh_task: TaskHandle,
}

impl ThemeService {
    /// Starts refreshing right away and then every `refresh_every`. Must be called inside a tokio runtime.
    pub fn start(selector: ThemeSelector, refresh_every: Duration) -> Self {
        let (tx, _rx) = watch::channel(selector.snapshot().clone());
        let updates = Arc::new(tx);
        let selector = Arc::new(RwLock::new(selector));

        let refresh_task = spawn_interval(refresh_every, {
            let selector = selector.clone();
            let updates = updates.clone();
            move || {
                let selector = selector.clone();
                let updates = updates.clone();
                async move {
                    let mut guard = selector.write().await;
                    guard.refresh();
                    publish(&updates, guard.snapshot());
                }
            }
        });

        info!("Theme refresh scheduled every {:?}", refresh_every);
        Self {
            selector,
            updates,
            refresh_task,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> ThemeSnapshot {
        self.selector.read().await.snapshot().clone()
    }

    pub async fn active_theme(&self) -> Theme {
        self.selector.read().await.active_theme()
    }

    pub async fn refresh_now(&self) -> Theme {
        let mut guard = self.selector.write().await;
        let theme = guard.refresh();
        publish(&self.updates, guard.snapshot());
        theme
    }

    pub async fn set_override(&self, theme: Option<Theme>) {
        let mut guard = self.selector.write().await;
        guard.set_override(theme);
        info!("Theme override set to {:?}", guard.user_override());
        publish(&self.updates, guard.snapshot());
    }

    pub async fn cycle_override(&self) -> Option<Theme> {
        let mut guard = self.selector.write().await;
        let next = guard.cycle_override();
        info!("Theme override cycled to {:?}", next);
        publish(&self.updates, guard.snapshot());
        next
    }

    pub async fn pick_random_override(&self) -> Option<Theme> {
        let mut guard = self.selector.write().await;
        let picked = {
            let mut rng = rand::thread_rng();
            guard.pick_random_override(&mut rng)
        };
        info!("Theme override picked at random: {:?}", picked);
        publish(&self.updates, guard.snapshot());
        picked
    }

    /// Feeds a key press to the selector. Returns true when it changed the override.
    pub async fn handle_key(&self, key: &str) -> bool {
        let mut guard = self.selector.write().await;
        let consumed = guard.handle_key(key);
        if consumed {
            publish(&self.updates, guard.snapshot());
        }
        consumed
    }

    /// Stops the refresh timer. Dropping the service has the same effect.
    pub fn stop(&self) {
        self.refresh_task.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MonthDay, SequenceWeather, ThemeCalendar};
    use chrono::NaiveDate;
    use shared::models::WeatherKind;

    const HOUR: Duration = Duration::from_secs(3600);

    fn plain_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
    }

    fn service(weather: Arc<SequenceWeather>) -> ThemeService {
        let calendar = ThemeCalendar::new(MonthDay::new(6, 20).unwrap(), Vec::new());
        let selector = ThemeSelector::new(calendar, Box::new(weather), vec![Theme::Retro, Theme::Neon, Theme::Pastel])
            .with_clock(plain_day);
        ThemeService::start(selector, HOUR)
    }

    #[tokio::test(start_paused = true)]
    async fn test_refreshes_on_start_and_every_interval() {
        let weather = Arc::new(SequenceWeather::new(vec![WeatherKind::Sunny, WeatherKind::Rainy]));
        let service = service(weather.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(service.active_theme().await, Theme::Sunny);

        tokio::time::sleep(HOUR).await;
        assert_eq!(service.active_theme().await, Theme::Rainy);
        assert_eq!(weather.draws(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_override_survives_refresh() {
        let weather = Arc::new(SequenceWeather::new(vec![WeatherKind::Sunny]));
        let service = service(weather);

        service.set_override(Some(Theme::Neon)).await;
        service.refresh_now().await;
        assert_eq!(service.active_theme().await, Theme::Neon);

        tokio::time::sleep(HOUR * 2).await;
        let snap = service.snapshot().await;
        assert_eq!(snap.active_theme, Theme::Neon);
        assert_eq!(snap.automatic_theme, Theme::Sunny);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_changes() {
        let weather = Arc::new(SequenceWeather::new(vec![WeatherKind::Cloudy]));
        let service = service(weather);
        let mut rx = service.subscribe();

        tokio::time::sleep(Duration::from_millis(1)).await;
        let _ = rx.borrow_and_update();

        assert!(service.handle_key("w").await);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().active_theme, Theme::Retro);

        assert!(!service.handle_key("x").await);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_service_stops_refresh() {
        let weather = Arc::new(SequenceWeather::new(vec![WeatherKind::Cloudy]));
        let service = service(weather.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(weather.draws(), 1);

        drop(service);
        tokio::time::sleep(HOUR * 3).await;
        assert_eq!(weather.draws(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_random_pick_changes_navigation_theme() {
        let weather = Arc::new(SequenceWeather::new(vec![WeatherKind::Cloudy]));
        let service = service(weather);
        let picked = service.pick_random_override().await;
        assert_ne!(picked.unwrap_or(Theme::Default), Theme::Default);
        service.stop();
    }
}
