/// Maximum valid Persian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in Esfand during a Persian leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Persian month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (common-year default, adjusted by the leap-year check)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (common year, adjusted by the leap-year check)
];

/// Julian day number of the proleptic Gregorian epoch (0001-01-01)
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;
/// Julian day number of the Islamic epoch (1 Muharram AH 1)
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;
/// Julian day number of the Persian epoch (1 Farvardin AP 1)
pub const PERSIAN_EPOCH: f64 = 1_948_320.5;
/// Day number of the Persian epoch in the midnight-aligned integer day count
pub const PERSIAN_EPOCH_DAY: i64 = 1_948_321;
/// Julian day number at the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Unix epoch in the midnight-aligned integer day count
pub const UNIX_EPOCH_DAY: i64 = 2_440_588;

/// Unix milliseconds at integer day number zero
pub const MILLIS_JULIAN_EPOCH: i64 = -210_866_803_200_000;
/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;
/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;
/// Milliseconds in one second
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Seconds in one day
pub const SECS_PER_DAY: i64 = 86_400;

/// Years in the Persian grand leap cycle
pub(crate) const PERSIAN_CYCLE_YEARS: i64 = 2820;
/// Days in one Persian grand leap cycle
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 1_029_983;
/// Base year of the Persian grand leap cycle
pub(crate) const PERSIAN_EPOCH_BASE: i64 = 474;

/// Seconds between the Windows epoch (1601-01-01) and the Unix epoch (1970-01-01)
pub const EPOCH_GAP_SECS: i64 = 11_644_473_600;
/// FILETIME ticks (100 ns intervals) per second
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// FILETIME ticks per minute
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
/// FILETIME ticks per hour
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
/// FILETIME ticks per day
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// Persian month names in Farsi, Farvardin first
pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names in Farsi, Shanbeh (Saturday) first
pub const PERSIAN_WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یک\u{200c}شنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
];

/// Default date component separator
pub const DATE_SEPARATOR: char = '/';
