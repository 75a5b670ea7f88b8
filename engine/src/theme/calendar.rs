// Year-less calendar days used for the birthday and holiday themes
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::Theme;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A calendar day without a year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::ConfigError(format!("Month {} is out of range", month)));
        }
        if day == 0 || day > days_in_month(month) {
            return Err(EngineError::ConfigError(format!("Day {} is out of range for month {}", day, month)));
        }
        Ok(Self { month, day })
    }

    pub(crate) const fn new_unchecked(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn of(date: &impl Datelike) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

// Feb 29 is allowed so leap-day birthdays can be configured.
fn days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::ConfigError(format!("Expected a MM-DD date, got '{}'", s));
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;
        MonthDay::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// Inclusive range of days during which a holiday theme applies.
/// A range whose start falls after its end wraps across new year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRange {
    pub theme: Theme,
    pub start: MonthDay,
    pub end: MonthDay,
}

impl HolidayRange {
    pub fn new(theme: Theme, start: MonthDay, end: MonthDay) -> Self {
        Self { theme, start, end }
    }

    pub fn contains(&self, day: MonthDay) -> bool {
        if self.start <= self.end {
            self.start <= day && day <= self.end
        } else {
            day >= self.start || day <= self.end
        }
    }
}

/// Fixed dates that trigger themes regardless of weather.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCalendar {
    pub birthday: MonthDay,
    pub holidays: Vec<HolidayRange>,
}

impl ThemeCalendar {
    pub fn new(birthday: MonthDay, holidays: Vec<HolidayRange>) -> Self {
        Self { birthday, holidays }
    }

    pub fn is_birthday(&self, date: NaiveDate) -> bool {
        MonthDay::of(&date) == self.birthday
    }

    /// First configured holiday whose range covers `date`.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<Theme> {
        let day = MonthDay::of(&date);
        self.holidays.iter().find(|range| range.contains(day)).map(|range| range.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(s: &str) -> MonthDay {
        s.parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(md("06-20"), MonthDay::new(6, 20).unwrap());
        assert_eq!(md("6-5").to_string(), "06-05");
        assert_eq!(md("02-29").day(), 29);
        assert!("00-10".parse::<MonthDay>().is_err());
        assert!("04-31".parse::<MonthDay>().is_err());
        assert!("0420".parse::<MonthDay>().is_err());
        assert!("aa-bb".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_ordering_is_month_then_day() {
        assert!(md("01-31") < md("02-01"));
        assert!(md("12-20") < md("12-26"));
    }

    #[test]
    fn test_range_is_inclusive() {
        let christmas = HolidayRange::new(Theme::Christmas, md("12-20"), md("12-26"));
        assert!(christmas.contains(md("12-20")));
        assert!(christmas.contains(md("12-23")));
        assert!(christmas.contains(md("12-26")));
        assert!(!christmas.contains(md("12-19")));
        assert!(!christmas.contains(md("12-27")));
    }

    #[test]
    fn test_range_wraps_new_year() {
        let new_year = HolidayRange::new(Theme::Gift, md("12-30"), md("01-02"));
        assert!(new_year.contains(md("12-31")));
        assert!(new_year.contains(md("01-01")));
        assert!(!new_year.contains(md("01-03")));
        assert!(!new_year.contains(md("06-15")));
    }

    #[test]
    fn test_calendar_lookups() {
        let calendar = ThemeCalendar::new(
            md("06-20"),
            vec![
                HolidayRange::new(Theme::Christmas, md("12-20"), md("12-26")),
                HolidayRange::new(Theme::Eid, md("04-20"), md("04-25")),
            ],
        );
        assert!(calendar.is_birthday(date(1999, 6, 20)));
        assert!(calendar.is_birthday(date(2031, 6, 20)));
        assert!(!calendar.is_birthday(date(2031, 6, 21)));
        assert_eq!(calendar.holiday_on(date(2026, 12, 24)), Some(Theme::Christmas));
        assert_eq!(calendar.holiday_on(date(2026, 4, 22)), Some(Theme::Eid));
        assert_eq!(calendar.holiday_on(date(2026, 7, 1)), None);
    }

    #[test]
    fn test_serde_uses_mm_dd() {
        let range = HolidayRange::new(Theme::Christmas, md("12-20"), md("12-26"));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"theme":"christmas","start":"12-20","end":"12-26"}"#);
        let back: HolidayRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
