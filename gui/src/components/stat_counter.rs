// Number that counts up with an ease-out curve when the page opens
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::utils::count_at;
use std::time::Duration;

const COUNT_DURATION: Duration = Duration::from_millis(2000);
const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn StatCounter(label: String, value: u32, suffix: String) -> Element {
    let mut shown = use_signal(|| 0u32);

    // The task belongs to this component and stops when it unmounts.
    use_future(move || async move {
        let started = tokio::time::Instant::now();
        loop {
            let elapsed = started.elapsed();
            shown.set(count_at(value, elapsed, COUNT_DURATION));
            if elapsed >= COUNT_DURATION {
                break;
            }
            tokio::time::sleep(FRAME).await;
        }
    });

    rsx! {
        div {
            class: "stat",
            style: "text-align: center; padding: 16px 24px; border-radius: 16px; background: var(--glass);",
            div { style: "font-size: 40px; font-weight: 800; color: var(--primary);", "{shown}{suffix}" }
            div { style: "font-size: 13px; opacity: 0.7;", "{label}" }
        }
    }
}
