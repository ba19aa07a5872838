//! Calendar day keys ("MM-DD") and month labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Polish genitive month names, indexed by month number (index 0 unused).
const MONTH_NAMES: [&str; 13] = [
    "",
    "stycznia",
    "lutego",
    "marca",
    "kwietnia",
    "maja",
    "czerwca",
    "lipca",
    "sierpnia",
    "września",
    "października",
    "listopada",
    "grudnia",
];

/// Genitive month name for a month number, or an empty string when out of range.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Largest day number a month can have in any year (February counts 29).
pub fn max_day(month: u32) -> Option<u32> {
    match month {
        2 => Some(29),
        4 | 6 | 9 | 11 => Some(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        _ => None,
    }
}

/// A calendar day irrespective of year.
///
/// Only combinations that exist in some Gregorian year can be constructed,
/// so `02-29` is valid and `04-31` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    month: u32,
    day: u32,
}

impl DayKey {
    /// Build a key, returning `None` for impossible month/day pairs
    pub fn new(month: u32, day: u32) -> Option<Self> {
        let max = max_day(month)?;
        if day == 0 || day > max {
            return None;
        }
        Some(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Error for strings that are not a valid "MM-DD" key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid day key: {0}")]
pub struct InvalidDayKey(pub String);

impl FromStr for DayKey {
    type Err = InvalidDayKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDayKey(s.to_string());

        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        DayKey::new(month, day).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_bounds() {
        assert!(DayKey::new(2, 29).is_some());
        assert!(DayKey::new(2, 30).is_none());
        assert!(DayKey::new(4, 31).is_none());
        assert!(DayKey::new(12, 31).is_some());
        assert!(DayKey::new(0, 1).is_none());
        assert!(DayKey::new(13, 1).is_none());
        assert!(DayKey::new(1, 0).is_none());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(DayKey::new(5, 3).unwrap().to_string(), "05-03");
        assert_eq!(DayKey::new(11, 21).unwrap().to_string(), "11-21");
    }

    #[test]
    fn test_parse() {
        assert_eq!("05-03".parse::<DayKey>().unwrap(), DayKey::new(5, 3).unwrap());
        assert!("5-3".parse::<DayKey>().is_err());
        assert!("06-31".parse::<DayKey>().is_err());
        assert!("quotes".parse::<DayKey>().is_err());
        assert!("ab-cd".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_parsed_keys_are_real_days() {
        // 2000 is a leap year, so every valid key is a date in it
        for month in 0..=99 {
            for day in 0..=99 {
                let text = format!("{:02}-{:02}", month, day);
                let real = chrono::NaiveDate::from_ymd_opt(2000, month, day).is_some();
                assert_eq!(text.parse::<DayKey>().is_ok(), real, "{}", text);
            }
        }
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(5), "maja");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
