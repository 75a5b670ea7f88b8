// Theme selection: calendar dates, weather samples and user overrides
pub mod calendar;
pub mod forecast;
pub mod selector;
pub mod weather;

pub use calendar::{HolidayRange, MonthDay, ThemeCalendar};
pub use forecast::{Coordinates, ForecastStatus};
pub use selector::{compute_automatic_theme, ThemeSelector, ThemeSnapshot};
pub use weather::{FixedWeather, RandomWeather, SequenceWeather, WeatherSource};
