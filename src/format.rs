//! Digit conversion and small display helpers.

/// Latin/Farsi digit pairs, `0`..`9` in order.
const DIGIT_PAIRS: [(char, char); 10] = [
    ('0', '۰'),
    ('1', '۱'),
    ('2', '۲'),
    ('3', '۳'),
    ('4', '۴'),
    ('5', '۵'),
    ('6', '۶'),
    ('7', '۷'),
    ('8', '۸'),
    ('9', '۹'),
];

/// Replaces Latin digits with Farsi (Extended Arabic-Indic) digits,
/// leaving every other character alone.
pub fn to_farsi_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            DIGIT_PAIRS
                .iter()
                .find(|(latin, _)| *latin == c)
                .map_or(c, |(_, farsi)| *farsi)
        })
        .collect()
}

/// Replaces Farsi digits with Latin digits, leaving every other
/// character alone.
pub fn to_latin_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            DIGIT_PAIRS
                .iter()
                .find(|(_, farsi)| *farsi == c)
                .map_or(c, |(latin, _)| *latin)
        })
        .collect()
}

/// Zero-pads a value to two digits
pub fn pad2(value: i64) -> String {
    format!("{value:02}")
}

/// Formats a millisecond duration as `MM:SS`, switching to `HH:MM:SS`
/// once it reaches an hour. Negative durations collapse to `"00:00"`.
pub fn format_duration(millis: i64) -> String {
    if millis < 0 {
        return "00:00".to_owned();
    }

    let total_seconds = millis / 1000;
    let hours = total_seconds / 3600;
    let minutes = total_seconds / 60 % 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
