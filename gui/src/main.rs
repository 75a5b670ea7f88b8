// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

/// Environment variable pointing at a config file that replaces the embedded default.
const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";

fn load_config() -> anyhow::Result<AppConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::load(path)
        }
        Err(_) => AppConfig::load_default(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting portfolio (Dioxus Desktop)...");

    let app_config = load_config()?;
    tracing::info!("Loaded configuration version {}.", app_config.version);

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.width, app_config.app.height)),
    );

    // The root component reads the config from context and owns the engine services.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    Ok(())
}
