// Engine configuration module
pub mod settings;

pub use settings::{ContactSettings, EngineSettings, ForecastSettings};
