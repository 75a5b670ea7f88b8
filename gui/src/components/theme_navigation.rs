// Floating theme switcher: one button per theme, or a single shuffle button on narrow windows
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Theme;

use crate::services::PageServices;
use crate::state::app_state::AppState;

const BAR_STYLE: &str = "position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); display: flex; align-items: center; gap: 6px; padding: 10px 12px; border-radius: 28px; background: var(--glass); backdrop-filter: blur(12px);";

fn icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Default => "🖥",
        Theme::Retro | Theme::Pastel => "🎨",
        Theme::Neon => "✨",
        Theme::Sunny => "☀",
        Theme::Rainy => "🌧",
        Theme::Christmas => "❄",
        Theme::Birthday => "🎉",
        Theme::Eid => "🌙",
        Theme::Gift => "🎁",
    }
}

#[component]
pub fn ThemeNavigation() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<PageServices>();
    let current = state.theme.read().navigation_theme();
    let forecast = state.forecast.read().label();
    let bar_style = BAR_STYLE;

    if state.is_mobile() {
        let on_shuffle = move |_| {
            let theme = services.theme.clone();
            spawn(async move {
                theme.pick_random_override().await;
            });
        };
        return rsx! {
            button {
                title: "Change Theme",
                style: "position: fixed; bottom: 24px; right: 24px; width: 56px; height: 56px; border-radius: 50%; border: none; font-size: 24px; background: var(--glass); cursor: pointer;",
                onclick: on_shuffle,
                "✨"
            }
        };
    }

    rsx! {
        nav {
            class: "theme-navigation",
            style: "{bar_style}",
            span {
                style: "font-size: 10px; font-weight: 800; letter-spacing: 0.24em; text-transform: uppercase; opacity: 0.4; padding: 0 6px;",
                "Theme"
            }
            for theme in Theme::NAVIGABLE {
                ThemeButton { key: "{theme}", theme: theme, active: theme == current }
            }
            span { style: "font-size: 11px; opacity: 0.6; padding-left: 8px; white-space: nowrap;", "{forecast}" }
        }
    }
}

#[component]
fn ThemeButton(theme: Theme, active: bool) -> Element {
    let services = use_context::<PageServices>();
    let background = if active { "var(--primary)" } else { "transparent" };
    let glyph = icon(theme);
    let label = theme.label();

    let on_click = move |_| {
        let service = services.theme.clone();
        spawn(async move {
            service.set_override(Some(theme)).await;
        });
    };

    rsx! {
        button {
            title: "{label}",
            style: "padding: 8px 10px; border-radius: 12px; border: none; cursor: pointer; background: {background}; color: var(--foreground);",
            onclick: on_click,
            "{glyph}"
        }
    }
}
