#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_desktop::tao::event::{Event, WindowEvent};
use dioxus_desktop::{use_window, use_wry_event_handler};
use engine::theme::forecast::resolve_from_settings;

use crate::components::{ContactSection, Hero, StatCounter, ThemeNavigation};
use crate::config::AppConfig;
use crate::services::PageServices;
use crate::state::app_state::AppState;

/// Page root. Owns the engine services and provides them, plus the reactive state, to every component.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_hook(|| PageServices::start(&config.engine));
    use_context_provider(|| services.clone());

    let state = use_context_provider(|| {
        let theme = services.theme.subscribe().borrow().clone();
        let contact = services.contact.subscribe().borrow().clone();
        AppState::new(theme, contact, config.app.width as f64)
    });

    // Mirror engine snapshots into signals.
    use_future({
        let services = services.clone();
        move || {
            let mut rx = services.theme.subscribe();
            let mut theme = state.theme;
            async move {
                loop {
                    let snapshot = rx.borrow_and_update().clone();
                    theme.set(snapshot);
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });
    use_future({
        let services = services.clone();
        move || {
            let mut rx = services.contact.subscribe();
            let mut contact = state.contact;
            async move {
                loop {
                    let snapshot = rx.borrow_and_update().clone();
                    contact.set(snapshot);
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        }
    });
    use_future({
        let forecast_settings = config.engine.forecast.clone();
        move || {
            let forecast_settings = forecast_settings.clone();
            let mut forecast = state.forecast;
            async move {
                forecast.set(resolve_from_settings(&forecast_settings).await);
            }
        }
    });

    let window = use_window();
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let logical = size.to_logical::<f64>(window.window.scale_factor());
            let mut width = state.window_width;
            width.set(logical.width);
        }
    });

    let on_keydown = {
        let services = services.clone();
        move |evt: KeyboardEvent| {
            let key = evt.key().to_string();
            let theme = services.theme.clone();
            spawn(async move {
                theme.handle_key(&key).await;
            });
        }
    };

    let css_vars = state.palette().css_vars();
    let active = state.active_theme();
    let profile = config.profile.clone();

    rsx! {
        div {
            class: "page theme-{active}",
            "data-theme": "{active}",
            tabindex: "0",
            autofocus: true,
            style: "{css_vars} min-height: 100vh; background: var(--background); color: var(--foreground); font-family: system-ui, sans-serif; outline: none;",
            onkeydown: on_keydown,
            Hero { profile: profile.clone() }
            section {
                class: "stats",
                style: "display: flex; gap: 32px; justify-content: center; padding: 48px 24px;",
                for stat in profile.stats.iter() {
                    StatCounter {
                        key: "{stat.label}",
                        label: stat.label.clone(),
                        value: stat.value,
                        suffix: stat.suffix.clone(),
                    }
                }
            }
            ContactSection { profile: profile.clone() }
            ThemeNavigation {}
        }
    }
}
