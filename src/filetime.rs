//! Windows FILETIME decoding.
//!
//! A FILETIME is a count of 100-nanosecond ticks since 1601-01-01 UTC,
//! as found in file metadata produced by Windows-originated systems.
//! Decoding routes the tick count through a Julian day number and then
//! into whichever calendar the caller asks for.

use crate::consts::{
    EPOCH_GAP_SECS, SECS_PER_DAY, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE,
    TICKS_PER_SECOND, UNIX_EPOCH_JD,
};
use crate::julian::{
    gregorian_to_jd, jd_to_gregorian, jd_to_islamic, jd_to_persian, persian_to_jd,
};
use std::fmt;
use std::str::FromStr;

/// Error type for FILETIME construction and daylight-range parsing.
///
/// Failures surface at construction; once a [`FileTime`] exists, every
/// conversion on it is total. Tick zero is the valid 1601 epoch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileTimeError {
    /// A tick count below zero cannot represent a FILETIME.
    #[error("negative tick count: {0}")]
    NegativeTicks(i64),

    /// The given instant precedes 1601-01-01 and has no tick representation.
    #[error("unix timestamp {0} ms precedes the Windows epoch (1601-01-01)")]
    BeforeWindowsEpoch(i64),

    /// The input string is not a tick count.
    #[error("invalid FILETIME value: {0}")]
    InvalidFormat(String),

    /// The daylight range string is malformed.
    #[error("invalid daylight range: {0} (expected \"fromMonth,fromDay,toMonth,toDay\")")]
    InvalidDaylightRange(String),
}

/// Which calendar a decoded day should be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    #[default]
    Gregorian,
    Persian,
    Islamic,
}

impl CalendarKind {
    /// Converts a Julian day number to `(year, month, day)` in this
    /// calendar, normalizing through a Gregorian civil day first so
    /// fractional input always snaps to the same day boundary.
    pub fn fields_from_jd(self, jd: f64) -> (i32, i32, i32) {
        let (year, month, day) = jd_to_gregorian(jd);
        let jd = gregorian_to_jd(year, month, day);
        match self {
            Self::Gregorian => jd_to_gregorian(jd),
            Self::Persian => jd_to_persian(jd),
            Self::Islamic => jd_to_islamic(jd),
        }
    }
}

/// A Windows FILETIME: 100-nanosecond ticks since 1601-01-01 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileTime(i64);

impl FileTime {
    /// Wraps a raw tick count.
    ///
    /// # Errors
    /// Returns [`FileTimeError::NegativeTicks`] for counts below zero.
    pub fn from_ticks(ticks: i64) -> Result<Self, FileTimeError> {
        if ticks < 0 {
            return Err(FileTimeError::NegativeTicks(ticks));
        }
        Ok(Self(ticks))
    }

    /// Returns the raw tick count
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Seconds since the Unix epoch; negative for instants before 1970.
    pub const fn to_unix_seconds(self) -> i64 {
        self.0 / TICKS_PER_SECOND - EPOCH_GAP_SECS
    }

    /// Milliseconds since the Unix epoch, at whole-second precision.
    pub const fn to_unix_millis(self) -> i64 {
        self.to_unix_seconds() * 1000
    }

    /// Builds a FILETIME from Unix-epoch milliseconds.
    ///
    /// # Errors
    /// Returns [`FileTimeError::BeforeWindowsEpoch`] for instants
    /// before 1601-01-01.
    pub fn from_unix_millis(millis: i64) -> Result<Self, FileTimeError> {
        let seconds = millis.div_euclid(1000) + EPOCH_GAP_SECS;
        if seconds < 0 {
            return Err(FileTimeError::BeforeWindowsEpoch(millis));
        }
        Ok(Self(seconds * TICKS_PER_SECOND))
    }

    /// Builds the FILETIME for midnight UTC of a Persian date.
    ///
    /// # Errors
    /// Returns [`FileTimeError::BeforeWindowsEpoch`] for dates before
    /// 1601-01-01 (10 Dey 979 in the Persian calendar).
    pub fn from_persian(year: i32, month: i32, day: i32) -> Result<Self, FileTimeError> {
        Self::from_jd(persian_to_jd(year, month, day))
    }

    /// Builds the FILETIME for midnight UTC of a Gregorian date.
    ///
    /// # Errors
    /// Returns [`FileTimeError::BeforeWindowsEpoch`] for dates before 1601-01-01.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, FileTimeError> {
        Self::from_jd(gregorian_to_jd(year, month, day))
    }

    fn from_jd(jd: f64) -> Result<Self, FileTimeError> {
        let unix_seconds = ((jd - UNIX_EPOCH_JD) * SECS_PER_DAY as f64) as i64;
        let seconds = unix_seconds + EPOCH_GAP_SECS;
        if seconds < 0 {
            return Err(FileTimeError::BeforeWindowsEpoch(unix_seconds * 1000));
        }
        Ok(Self(seconds * TICKS_PER_SECOND))
    }

    /// Julian day number of this instant shifted by a timezone offset
    /// in ticks. Sub-second precision is dropped before the day split,
    /// matching the integer pipeline of the source data.
    pub fn to_jd(self, offset_ticks: i64) -> f64 {
        let ticks = self.0 + offset_ticks;
        ((ticks / TICKS_PER_SECOND - EPOCH_GAP_SECS) / SECS_PER_DAY) as f64 + UNIX_EPOCH_JD
    }

    /// Clock time of day `(hour, minute, second)` at the given
    /// timezone offset, via nested tick remainders.
    pub fn time_of_day(self, offset_ticks: i64) -> (u8, u8, u8) {
        let ticks = self.0 + offset_ticks;
        let day_rem = ticks % TICKS_PER_DAY;
        let hour_rem = day_rem % TICKS_PER_HOUR;
        let minute_rem = hour_rem % TICKS_PER_MINUTE;
        (
            (day_rem / TICKS_PER_HOUR) as u8,
            (hour_rem / TICKS_PER_MINUTE) as u8,
            (minute_rem / TICKS_PER_SECOND) as u8,
        )
    }

    /// Decodes this instant into display fields in the requested
    /// calendar, applying the timezone offset and, when the day falls
    /// inside `daylight`, a one-hour clock adjustment. The daylight
    /// shift moves the clock only; the calendar day keeps the standard
    /// offset.
    pub fn decode(
        self,
        offset_ticks: i64,
        daylight: Option<&DaylightRange>,
        kind: CalendarKind,
    ) -> DateTimeFields {
        let jd = self.to_jd(offset_ticks);

        let mut ticks = self.0;
        if let Some(range) = daylight {
            if range.contains(jd, kind) {
                ticks += TICKS_PER_HOUR;
            }
        }

        let (year, month, day) = kind.fields_from_jd(jd);

        let shifted = ticks + offset_ticks;
        let day_rem = shifted % TICKS_PER_DAY;
        let hour_rem = day_rem % TICKS_PER_HOUR;
        let minute_rem = hour_rem % TICKS_PER_MINUTE;

        DateTimeFields {
            year,
            month: month as u8,
            day: day as u8,
            hour: (day_rem / TICKS_PER_HOUR) as u8,
            minute: (hour_rem / TICKS_PER_MINUTE) as u8,
            second: (minute_rem / TICKS_PER_SECOND) as u8,
        }
    }
}

impl FromStr for FileTime {
    type Err = FileTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let ticks = trimmed
            .parse::<i64>()
            .map_err(|_| FileTimeError::InvalidFormat(trimmed.to_owned()))?;
        Self::from_ticks(ticks)
    }
}

/// Decoded calendar and clock fields, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeFields {
    /// `[year, month, day, hour, minute, second]` as strings, all but
    /// the year zero-padded to two digits.
    pub fn to_padded_strings(&self) -> [String; 6] {
        [
            self.year.to_string(),
            format!("{:02}", self.month),
            format!("{:02}", self.day),
            format!("{:02}", self.hour),
            format!("{:02}", self.minute),
            format!("{:02}", self.second),
        ]
    }
}

impl fmt::Display for DateTimeFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// A month/day window during which a one-hour daylight adjustment
/// applies, interpreted in the calendar the decode runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaylightRange {
    from_month: u8,
    from_day: u8,
    to_month: u8,
    to_day: u8,
}

impl DaylightRange {
    /// Creates a window from inclusive month/day endpoints.
    pub const fn new(from_month: u8, from_day: u8, to_month: u8, to_day: u8) -> Self {
        Self {
            from_month,
            from_day,
            to_month,
            to_day,
        }
    }

    /// Whether the day holding `jd` falls inside this window in the
    /// given calendar.
    pub fn contains(&self, jd: f64, kind: CalendarKind) -> bool {
        let (_, month, day) = kind.fields_from_jd(jd);
        let (from_month, from_day) = (i32::from(self.from_month), i32::from(self.from_day));
        let (to_month, to_day) = (i32::from(self.to_month), i32::from(self.to_day));
        to_month >= month
            && month >= from_month
            && (from_month != month || day >= from_day)
            && (to_month != month || to_day >= day)
    }
}

impl FromStr for DaylightRange {
    type Err = FileTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || FileTimeError::InvalidDaylightRange(trimmed.to_owned());
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(invalid());
        }
        let field = |index: usize| parts[index].parse::<u8>().map_err(|_| invalid());
        Ok(Self::new(field(0)?, field(1)?, field(2)?, field(3)?))
    }
}
