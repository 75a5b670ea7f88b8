// Async owners of the theme selector and the contact form
pub mod contact_service;
pub mod theme_service;

pub use contact_service::{ContactDelays, ContactService};
pub use theme_service::ThemeService;

use tokio::sync::watch;

// Only wakes subscribers when the value actually changed.
fn publish<T: Clone + PartialEq>(updates: &watch::Sender<T>, value: &T) {
    updates.send_if_modified(|current| {
        if current == value {
            return false;
        }
        *current = value.clone();
        true
    });
}
