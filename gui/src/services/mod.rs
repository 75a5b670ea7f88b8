// Engine services owned by the page root
use engine::config::EngineSettings;
use engine::services::{ContactService, ThemeService};
use engine::theme::{RandomWeather, ThemeSelector};
use std::rc::Rc;

/// Handles to the engine services, shared with components through context.
/// When the last handle goes away the services drop and cancel their timers.
#[derive(Clone)]
pub struct PageServices {
    pub theme: Rc<ThemeService>,
    pub contact: Rc<ContactService>,
}

impl PageServices {
    /// Must run inside the tokio runtime that drives the window.
    pub fn start(settings: &EngineSettings) -> Self {
        let selector = ThemeSelector::from_settings(settings, Box::new(RandomWeather));
        let theme = ThemeService::start(selector, settings.refresh_interval());
        let contact = ContactService::from_settings(&settings.contact);
        tracing::info!("Page services started");
        Self {
            theme: Rc::new(theme),
            contact: Rc::new(contact),
        }
    }
}

