// GUI components module
pub mod contact_section;
pub mod hero;
pub mod stat_counter;
pub mod theme_navigation;

// Re-export components for easier access from app.rs
pub use contact_section::ContactSection;
pub use hero::Hero;
pub use stat_counter::StatCounter;
pub use theme_navigation::ThemeNavigation;
