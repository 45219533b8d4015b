mod consts;
mod datetime;
mod filetime;
mod format;
mod julian;
mod prelude;
mod types;

pub use consts::*;
pub use datetime::PersianDateTime;
pub use filetime::{CalendarKind, DateTimeFields, DaylightRange, FileTime, FileTimeError};
pub use format::{format_duration, pad2, to_farsi_digits, to_latin_digits};
pub use julian::{
    day_number_to_persian, gregorian_to_jd, is_gregorian_leap_year, is_persian_leap_year,
    islamic_to_jd, jd_to_gregorian, jd_to_islamic, jd_to_persian, mod_floor, persian_to_day_number,
    persian_to_jd,
};
pub use types::{Day, Month, Year, days_in_month};

use crate::format::to_latin_digits as normalize_digits;
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A validated date in the Persian (Jalali) calendar.
///
/// Values are immutable: every operation that would change a field
/// returns a new date instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl PersianDate {
    /// Creates a new date from raw field values.
    ///
    /// # Errors
    /// Returns `ParseError` if any field is out of range for the
    /// Persian calendar (validated year first, then month, then day).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a new date from wide integer fields, preserving the raw
    /// values in the error when they are out of range.
    ///
    /// # Errors
    /// Returns `ParseError` if any field is out of range.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let y = u16::try_from(year).map_err(|_| ParseError::InvalidYear(year))?;
        let m = u8::try_from(month).map_err(|_| ParseError::InvalidMonth(month))?;
        let d = u8::try_from(day).map_err(|_| ParseError::InvalidDay { year, month, day })?;
        Self::new(y, m, d)
    }

    /// Returns the year (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    /// Returns true if this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Farsi name of this date's month
    pub fn month_name(&self) -> &'static str {
        PERSIAN_MONTH_NAMES[usize::from(self.month()) - 1]
    }

    /// Day of the week, 0 = Shanbeh (Saturday) through 6 = Jomeh (Friday)
    pub fn weekday(&self) -> u8 {
        mod_floor(self.to_day_number() - UNIX_EPOCH_DAY + 5, 7) as u8
    }

    /// Farsi name of this date's weekday
    pub fn weekday_name(&self) -> &'static str {
        PERSIAN_WEEKDAY_NAMES[usize::from(self.weekday())]
    }
}

// --- conversions through the day-count scales ---

impl PersianDate {
    /// Midnight-aligned integer day number of this date.
    pub fn to_day_number(&self) -> i64 {
        persian_to_day_number(
            i64::from(self.year()),
            i32::from(self.month()),
            i32::from(self.day()),
        )
    }

    /// Builds a date back from an integer day number.
    ///
    /// # Errors
    /// Returns `ParseError` if the day number lands outside year 1..=9999.
    pub fn from_day_number(day_number: i64) -> Result<Self, ParseError> {
        let (year, month, day) = day_number_to_persian(day_number);
        Self::from_ymd(year, month, day)
    }

    /// Fractional Julian day number of this date (midnight UTC).
    pub fn to_jd(&self) -> f64 {
        persian_to_jd(
            i32::from(self.year()),
            i32::from(self.month()),
            i32::from(self.day()),
        )
    }

    /// Builds a date back from a fractional Julian day number.
    ///
    /// # Errors
    /// Returns `ParseError` if the day number lands outside year 1..=9999.
    pub fn from_jd(jd: f64) -> Result<Self, ParseError> {
        let (year, month, day) = jd_to_persian(jd);
        Self::from_ymd(year, month, day)
    }

    /// The same calendar day in the Gregorian calendar.
    pub fn to_gregorian(&self) -> (i32, i32, i32) {
        jd_to_gregorian(self.to_jd())
    }

    /// Builds the Persian date for a Gregorian calendar day.
    ///
    /// # Errors
    /// Returns `ParseError` if the converted date lands outside year 1..=9999.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        Self::from_jd(gregorian_to_jd(year, month, day))
    }

    /// The same calendar day in the tabular Islamic calendar.
    pub fn to_islamic(&self) -> (i32, i32, i32) {
        jd_to_islamic(self.to_jd())
    }
}

// --- calendar arithmetic ---

impl PersianDate {
    /// Moves this date by whole days, crossing month and year
    /// boundaries as needed.
    ///
    /// # Errors
    /// Returns `ParseError` if the result lands outside year 1..=9999.
    pub fn add_days(&self, days: i64) -> Result<Self, ParseError> {
        Self::from_day_number(self.to_day_number() + days)
    }

    /// Moves this date by whole months, carrying into the year and
    /// clamping the day when the target month is shorter (31 Shahrivar
    /// plus one month is 30 Mehr). Negative amounts carry correctly.
    ///
    /// # Errors
    /// Returns `ParseError` if the result lands outside year 1..=9999.
    pub fn add_months(&self, months: i32) -> Result<Self, ParseError> {
        let total = i64::from(self.month()) - 1 + i64::from(months);
        // bounded by i32 months on a u16 year, so the cast is lossless
        let year = (i64::from(self.year()) + total.div_euclid(12)) as i32;
        let month = (mod_floor(total, 12) + 1) as u8;
        let year_u16 = u16::try_from(year).map_err(|_| ParseError::InvalidYear(year))?;
        if year_u16 > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        let day = self.day().min(days_in_month(year_u16, month));
        Self::new(year_u16, month, day)
    }

    /// Moves this date by whole years, clamping 30 Esfand to 29 when
    /// the target year is not a leap year.
    ///
    /// # Errors
    /// Returns `ParseError` if the result lands outside year 1..=9999.
    pub fn add_years(&self, years: i32) -> Result<Self, ParseError> {
        let year = i32::from(self.year()) + years;
        let year_u16 = u16::try_from(year).map_err(|_| ParseError::InvalidYear(year))?;
        if year_u16 > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        let day = self.day().min(days_in_month(year_u16, self.month()));
        Self::new(year_u16, self.month(), day)
    }
}

// --- parsing ---

impl FromStr for PersianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_delimiter(s, DATE_SEPARATOR)
    }
}

impl PersianDate {
    /// Parses a `year/month/day` string with an arbitrary delimiter.
    ///
    /// Farsi digits are normalized to Latin before parsing, and
    /// whitespace around tokens is ignored.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input,
    /// `ParseError::InvalidFormat` for wrong token counts or
    /// non-numeric tokens, and the field-specific variants for
    /// out-of-range values (year checked first, then month, then day).
    pub fn parse_with_delimiter(s: &str, delimiter: char) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let normalized = normalize_digits(trimmed);
        let tokens: Vec<&str> = normalized.split(delimiter).map(str::trim).collect();
        if tokens.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "expected 3 fields separated by '{delimiter}', found {}: {trimmed}",
                tokens.len()
            )));
        }

        let year = Self::parse_i32(tokens[0])?;
        let month = Self::parse_i32(tokens[1])?;
        let day = Self::parse_i32(tokens[2])?;

        Self::from_ymd(year, month, day)
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{}{:02}{}{:02}",
            self.year.get(),
            DATE_SEPARATOR,
            self.month.get(),
            DATE_SEPARATOR,
            self.day.get()
        )
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
