// Contact form with per-field errors and the simulated send
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{ContactField, SubmissionStatus};

use crate::config::Profile;
use crate::services::PageServices;
use crate::state::app_state::AppState;

const INPUT_STYLE: &str = "width: 100%; padding: 12px 16px; border-radius: 12px; border: 1px solid var(--secondary); background: var(--glass); color: var(--foreground); box-sizing: border-box;";

#[component]
pub fn ContactSection(profile: Profile) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<PageServices>();

    let snapshot = state.contact.read().clone();
    let locked = snapshot.status.is_locked();
    let button_label = match snapshot.status {
        SubmissionStatus::Idle => "Send message",
        SubmissionStatus::Submitting => "Sending...",
        SubmissionStatus::Submitted => "Message sent!",
    };

    let on_submit = {
        let contact = services.contact.clone();
        move |_| {
            let contact = contact.clone();
            spawn(async move {
                if let Err(e) = contact.submit().await {
                    tracing::debug!("Contact submit not sent: {}", e);
                }
            });
        }
    };

    rsx! {
        section {
            class: "contact",
            id: "contact",
            style: "display: grid; grid-template-columns: 1fr 2fr; gap: 48px; padding: 64px 48px;",
            div {
                h2 { style: "font-size: 36px; margin: 0 0 16px;", "Let's work together" }
                ContactDetail { label: "Email", value: profile.email.clone() }
                ContactDetail { label: "Phone", value: profile.phone.clone() }
                ContactDetail { label: "Location", value: profile.location.clone() }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                for field in ContactField::ALL {
                    FormField {
                        key: "{field}",
                        field: field,
                        value: snapshot.fields.get(field).to_string(),
                        error: snapshot.errors.message(field),
                        disabled: locked,
                    }
                }
                button {
                    r#type: "button",
                    disabled: locked,
                    style: "padding: 18px; border-radius: 16px; border: none; font-weight: 700; text-transform: uppercase; letter-spacing: 0.12em; background: var(--primary); color: var(--background); cursor: pointer;",
                    onclick: on_submit,
                    "{button_label}"
                }
            }
        }
    }
}

#[component]
fn ContactDetail(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            div { style: "font-size: 12px; text-transform: uppercase; opacity: 0.6;", "{label}" }
            div { style: "font-size: 16px;", "{value}" }
        }
    }
}

#[component]
fn FormField(field: ContactField, value: String, error: Option<String>, disabled: bool) -> Element {
    let services = use_context::<PageServices>();
    let border = if error.is_some() { "border-color: var(--error);" } else { "" };
    let input_style = INPUT_STYLE;
    let input_type = if field == ContactField::Email { "email" } else { "text" };
    let placeholder = match field {
        ContactField::Email => "your.email@example.com".to_string(),
        _ => field.label().to_string(),
    };

    let on_input = move |evt: FormEvent| {
        let contact = services.contact.clone();
        let value = evt.value();
        spawn(async move {
            if let Err(e) = contact.edit(field, value).await {
                tracing::debug!("Ignoring edit to {}: {}", field, e);
            }
        });
    };
    // Typing in the form must not trigger the theme shortcut on the page root.
    let on_keydown = move |evt: KeyboardEvent| evt.stop_propagation();

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span { style: "font-size: 13px; opacity: 0.8;", "{field}" }
            if field == ContactField::Message {
                textarea {
                    rows: "5",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    disabled: disabled,
                    style: "{input_style} {border} resize: none;",
                    oninput: on_input,
                    onkeydown: on_keydown,
                }
            } else {
                input {
                    r#type: "{input_type}",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    disabled: disabled,
                    style: "{input_style} {border}",
                    oninput: on_input,
                    onkeydown: on_keydown,
                }
            }
            {error.map(|message| rsx! {
                span { class: "field-error", style: "color: var(--error); font-size: 13px;", "{message}" }
            })}
        }
    }
}
