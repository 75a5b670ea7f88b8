// Engine library root
// Theme selection, contact form lifecycle and the timers that drive them.

pub mod config;
pub mod contact;
pub mod error;
pub mod scheduler;
pub mod services;
pub mod theme;

pub use error::{EngineError, Result};
