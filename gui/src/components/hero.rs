// Hero banner with the profile headline
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::Profile;
use crate::services::PageServices;
use crate::state::app_state::AppState;

const BANNER_STYLE: &str = "display: inline-block; margin-bottom: 24px; padding: 14px 28px; border-radius: 16px; border: 1px solid var(--primary); background: var(--glass); color: var(--primary); font-weight: 700; letter-spacing: 0.08em; text-transform: uppercase; font-size: 14px;";

fn birthday_greeting(name: &str) -> String {
    match name.split_whitespace().next() {
        Some(first) => format!("🎉 Happy Birthday, {}!", first),
        None => "🎉 Happy Birthday!".to_string(),
    }
}

#[component]
pub fn Hero(profile: Profile) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<PageServices>();
    let is_birthday = state.theme.read().is_birthday;
    let greeting = birthday_greeting(&profile.name);
    let banner_style = BANNER_STYLE;

    // Clicking the name is the pointer version of the cycle shortcut.
    let on_name_click = move |_| {
        let theme = services.theme.clone();
        spawn(async move {
            theme.cycle_override().await;
        });
    };

    rsx! {
        header {
            class: "hero",
            style: "padding: 96px 24px 48px; text-align: center;",
            if is_birthday {
                div { class: "birthday-banner", style: "{banner_style}", "{greeting}" }
            }
            p {
                style: "letter-spacing: 0.24em; text-transform: uppercase; font-size: 12px; color: var(--accent);",
                "{profile.role}"
            }
            h1 {
                style: "font-size: 56px; margin: 12px 0; color: var(--foreground); cursor: pointer; user-select: none;",
                onclick: on_name_click,
                "{profile.name}"
            }
            p { style: "font-size: 18px; opacity: 0.8; max-width: 640px; margin: 0 auto;", "{profile.tagline}" }
        }
    }
}
