//! Total conversion math between Julian day numbers and the Gregorian,
//! Persian (Jalali) and Islamic calendars.
//!
//! Every function here is total over its numeric domain: out-of-range
//! fields (month 13, day 32, negative days) are not rejected and produce
//! well-defined but meaningless output. Validation lives in the typed
//! layer ([`crate::Year`], [`crate::Month`], [`crate::Day`]) and in the
//! date parser, keeping the arithmetic itself simple.
//!
//! Two day-count representations are used:
//!
//! - **Fractional Julian day numbers** (`f64`): the astronomical
//!   convention where a calendar day starts at `*.5` (midnight UTC).
//! - **Integer day numbers** (`i64`): a midnight-aligned count used by
//!   the millisecond-backed [`crate::PersianDateTime`], offset from the
//!   fractional scale by half a day.

use crate::consts::{
    GREGORIAN_EPOCH, ISLAMIC_EPOCH, PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_YEARS, PERSIAN_EPOCH,
    PERSIAN_EPOCH_BASE, PERSIAN_EPOCH_DAY,
};

/// Floored modulo: `value - modulus * floor(value / modulus)`.
///
/// The result carries the sign of `modulus`, unlike the `%` operator.
pub const fn mod_floor(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

/// Floored modulo over `f64`; keeps the grand-cycle decomposition
/// consistent with the `floor` used for the quotient.
fn fmod_floor(value: f64, modulus: f64) -> f64 {
    value - modulus * (value / modulus).floor()
}

/// Gregorian leap year test: divisible by 4, not by 100 unless by 400.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && !(year % 100 == 0 && year % 400 != 0)
}

/// Persian leap year test using the 2820-year grand-cycle approximation.
///
/// This is the arithmetic (Birashk) rule, not the astronomical calendar;
/// the two diverge for a handful of years per cycle (1403 is common and
/// 1404 leap under this rule).
pub const fn is_persian_leap_year(year: i32) -> bool {
    let cycle_year =
        mod_floor(year as i64 - PERSIAN_EPOCH_BASE, PERSIAN_CYCLE_YEARS) + PERSIAN_EPOCH_BASE;
    mod_floor((38 + cycle_year) * 682, 2816) < 682
}

/// Converts a Gregorian date to a fractional Julian day number.
pub fn gregorian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let y = f64::from(year);
    let leap_adj = if month <= 2 {
        0.0
    } else if is_gregorian_leap_year(year) {
        -1.0
    } else {
        -2.0
    };
    (GREGORIAN_EPOCH - 1.0)
        + 365.0 * (y - 1.0)
        + ((y - 1.0) / 4.0).floor()
        - ((y - 1.0) / 100.0).floor()
        + ((y - 1.0) / 400.0).floor()
        + ((367.0 * f64::from(month) - 362.0) / 12.0 + leap_adj + f64::from(day)).floor()
}

/// Converts a fractional Julian day number to a Gregorian `(year, month, day)`.
///
/// Decomposes the day count into 400-year, 100-year and 4-year cycles
/// (146097 / 36524 / 1461 days) before locating the month within the year.
pub fn jd_to_gregorian(jd: f64) -> (i32, i32, i32) {
    let wjd = (jd - 0.5).floor() + 0.5;
    let depoch = wjd - GREGORIAN_EPOCH;
    let quadricent = (depoch / 146_097.0).floor();
    let dqc = depoch % 146_097.0;
    let cent = (dqc / 36_524.0).floor();
    let dcent = dqc % 36_524.0;
    let quad = (dcent / 1461.0).floor();
    let dquad = dcent % 1461.0;
    let yindex = (dquad / 365.0).floor();
    let mut year = (quadricent * 400.0 + cent * 100.0 + quad * 4.0 + yindex) as i32;
    if !(cent as i64 == 4 || yindex as i64 == 4) {
        year += 1;
    }

    let yearday = wjd - gregorian_to_jd(year, 1, 1);
    let leap_adj = if wjd < gregorian_to_jd(year, 3, 1) {
        0.0
    } else if is_gregorian_leap_year(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leap_adj) * 12.0 + 373.0) / 367.0).floor() as i32;
    let day = (wjd - gregorian_to_jd(year, month, 1)) as i32 + 1;

    (year, month, day)
}

/// Converts a Persian date to a fractional Julian day number.
///
/// Years at or below zero take the shifted epoch base (473 instead of
/// 474); there is no year zero in the proleptic Persian count. The
/// epoch base is reduced with floored modulo so the decomposition stays
/// valid for years before the 475 cycle reference.
pub fn persian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let epbase = f64::from(year) - if year >= 0 { 474.0 } else { 473.0 };
    let epyear = 474.0 + fmod_floor(epbase, 2820.0);
    let month_days = if month <= 7 {
        f64::from(month - 1) * 31.0
    } else {
        f64::from(month - 1) * 30.0 + 6.0
    };
    f64::from(day)
        + month_days
        + ((epyear * 682.0 - 110.0) / 2816.0).floor()
        + (epyear - 1.0) * 365.0
        + (epbase / 2820.0).floor() * 1_029_983.0
        + (PERSIAN_EPOCH - 1.0)
}

/// Converts a fractional Julian day number to a Persian `(year, month, day)`.
pub fn jd_to_persian(jd: f64) -> (i32, i32, i32) {
    let jd = jd.floor() + 0.5;
    let depoch = jd - persian_to_jd(475, 1, 1);
    let cycle = (depoch / 1_029_983.0).floor();
    let cyear = fmod_floor(depoch, 1_029_983.0);
    let ycycle = if cyear as i64 == 1_029_982 {
        2820.0
    } else {
        let aux1 = (cyear / 366.0).floor();
        let aux2 = cyear % 366.0;
        ((2134.0 * aux1 + 2816.0 * aux2 + 2815.0) / 1_028_522.0).floor() + aux1 + 1.0
    };
    let mut year = ycycle + 2820.0 * cycle + 474.0;
    if year <= 0.0 {
        // no year zero
        year -= 1.0;
    }
    let year = year as i32;
    let yday = jd - persian_to_jd(year, 1, 1) + 1.0;
    let month = if yday <= 186.0 {
        (yday / 31.0).ceil() as i32
    } else {
        ((yday - 6.0) / 30.0).ceil() as i32
    };
    let day = (jd - persian_to_jd(year, month, 1)) as i32 + 1;

    (year, month, day)
}

/// Converts a tabular Islamic date to a fractional Julian day number.
pub fn islamic_to_jd(year: i32, month: i32, day: i32) -> f64 {
    f64::from(day)
        + (29.5 * f64::from(month - 1)).ceil()
        + f64::from(year - 1) * 354.0
        + ((3.0 + 11.0 * f64::from(year)) / 30.0).floor()
        + ISLAMIC_EPOCH
        - 1.0
}

/// Converts a fractional Julian day number to a tabular Islamic
/// `(year, month, day)` using the 30-year cycle approximation.
pub fn jd_to_islamic(jd: f64) -> (i32, i32, i32) {
    let jd = jd.floor() + 0.5;
    let year = ((30.0 * (jd - ISLAMIC_EPOCH) + 10_646.0) / 10_631.0).floor() as i32;
    let month_est = ((jd - (29.0 + islamic_to_jd(year, 1, 1))) / 29.5).ceil() + 1.0;
    let month = month_est.min(12.0) as i32;
    let day = (jd - islamic_to_jd(year, month, 1)) as i32 + 1;

    (year, month, day)
}

/// Converts a Persian date to the midnight-aligned integer day number.
pub fn persian_to_day_number(year: i64, month: i32, day: i32) -> i64 {
    let cycle_year = mod_floor(year - PERSIAN_EPOCH_BASE, PERSIAN_CYCLE_YEARS) + PERSIAN_EPOCH_BASE;
    let month0 = i64::from(month) - 1;
    let month_days = if month0 < 7 { 31 * month0 } else { 30 * month0 + 6 };
    365 * (cycle_year - 1)
        + (682 * cycle_year - 110).div_euclid(2816)
        + (PERSIAN_EPOCH_DAY - 1)
        + PERSIAN_CYCLE_DAYS * (year - PERSIAN_EPOCH_BASE).div_euclid(PERSIAN_CYCLE_YEARS)
        + month_days
        + i64::from(day)
}

/// Converts a midnight-aligned integer day number to a Persian
/// `(year, month, day)`.
pub fn day_number_to_persian(day_number: i64) -> (i32, i32, i32) {
    let offset = day_number - persian_to_day_number(475, 1, 1);
    let cyear = mod_floor(offset, PERSIAN_CYCLE_DAYS);
    let ycycle = if cyear == PERSIAN_CYCLE_DAYS - 1 {
        PERSIAN_CYCLE_YEARS
    } else {
        (2816 * cyear + 1_031_337).div_euclid(1_028_522)
    };
    let year =
        PERSIAN_EPOCH_BASE + PERSIAN_CYCLE_YEARS * offset.div_euclid(PERSIAN_CYCLE_DAYS) + ycycle;
    let aux = 1 + day_number - persian_to_day_number(year, 1, 1);
    let month = if aux > 186 {
        (((aux - 6) as f64) / 30.0).ceil() as i32
    } else {
        ((aux as f64) / 31.0).ceil() as i32
    };
    let day = day_number - (persian_to_day_number(year, month, 1) - 1);

    (year as i32, month, day as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{UNIX_EPOCH_DAY, UNIX_EPOCH_JD};

    #[test]
    fn mod_floor_signs() {
        assert_eq!(mod_floor(7, 3), 1);
        assert_eq!(mod_floor(-7, 3), 2);
        assert_eq!(mod_floor(0, 2820), 0);
        assert_eq!(mod_floor(-1, 2820), 2819);
    }

    #[test]
    fn gregorian_leap_years() {
        assert!(is_gregorian_leap_year(2020));
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2021));
        assert!(!is_gregorian_leap_year(2100));
        assert!(is_gregorian_leap_year(2400));
    }

    #[test]
    fn persian_leap_years_reference_window() {
        struct TestCase {
            year: i32,
            is_leap: bool,
        }

        // The 2820-cycle rule's own predictions; note the documented
        // break from the 33-year astronomical pattern at 1403/1404.
        let cases = [
            TestCase { year: 1370, is_leap: true },
            TestCase { year: 1371, is_leap: false },
            TestCase { year: 1375, is_leap: true },
            TestCase { year: 1379, is_leap: true },
            TestCase { year: 1383, is_leap: true },
            TestCase { year: 1387, is_leap: true },
            TestCase { year: 1391, is_leap: true },
            TestCase { year: 1395, is_leap: true },
            TestCase { year: 1399, is_leap: true },
            TestCase { year: 1400, is_leap: false },
            TestCase { year: 1401, is_leap: false },
            TestCase { year: 1402, is_leap: false },
            TestCase { year: 1403, is_leap: false },
            TestCase { year: 1404, is_leap: true },
            TestCase { year: 1408, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(
                is_persian_leap_year(case.year),
                case.is_leap,
                "year {} leap prediction mismatch",
                case.year
            );
        }
    }

    #[test]
    fn persian_leap_density_over_grand_cycle() {
        // 683 leap years per 2820-year grand cycle
        let leaps = (474..474 + 2820).filter(|&y| is_persian_leap_year(y)).count();
        assert_eq!(leaps, 683);
    }

    #[test]
    fn persian_leap_matches_year_length() {
        for year in 1300..1500 {
            let days = (persian_to_jd(year + 1, 1, 1) - persian_to_jd(year, 1, 1)) as i64;
            let expected = if is_persian_leap_year(year) { 366 } else { 365 };
            assert_eq!(days, expected, "year {year} length mismatch");
        }
    }

    #[test]
    fn gregorian_unix_epoch() {
        assert_eq!(gregorian_to_jd(1970, 1, 1), UNIX_EPOCH_JD);
        assert_eq!(jd_to_gregorian(UNIX_EPOCH_JD), (1970, 1, 1));
    }

    #[test]
    fn gregorian_known_dates() {
        assert_eq!(gregorian_to_jd(2021, 1, 1), 2_459_215.5);
        assert_eq!(jd_to_gregorian(2_459_215.5), (2021, 1, 1));
        assert_eq!(jd_to_gregorian(gregorian_to_jd(2000, 2, 29)), (2000, 2, 29));
        assert_eq!(jd_to_gregorian(gregorian_to_jd(1582, 10, 15)), (1582, 10, 15));
    }

    #[test]
    fn gregorian_round_trip_broad() {
        for year in (1..=9999).step_by(13) {
            for &(month, day) in &[(1, 1), (2, 28), (3, 1), (6, 30), (12, 31)] {
                let jd = gregorian_to_jd(year, month, day);
                assert_eq!(
                    jd_to_gregorian(jd),
                    (year, month, day),
                    "round trip failed for {year}-{month:02}-{day:02}"
                );
            }
        }
    }

    #[test]
    fn gregorian_round_trip_leap_days() {
        for year in (4..=9996).step_by(4) {
            if !is_gregorian_leap_year(year) {
                continue;
            }
            let jd = gregorian_to_jd(year, 2, 29);
            assert_eq!(jd_to_gregorian(jd), (year, 2, 29));
        }
    }

    #[test]
    fn persian_new_year_1399() {
        // 1 Farvardin 1399 = 2020-03-20
        let jd = persian_to_jd(1399, 1, 1);
        assert_eq!(jd_to_gregorian(jd), (2020, 3, 20));
        assert_eq!(jd_to_persian(jd), (1399, 1, 1));
    }

    #[test]
    fn persian_known_dates() {
        // 2021-01-01 = 12 Dey 1399
        assert_eq!(jd_to_persian(gregorian_to_jd(2021, 1, 1)), (1399, 10, 12));
        // Unix epoch = 11 Dey 1348
        assert_eq!(jd_to_persian(UNIX_EPOCH_JD), (1348, 10, 11));
        // 1 Farvardin 1 is the Persian epoch
        assert_eq!(persian_to_jd(1, 1, 1), PERSIAN_EPOCH);
    }

    #[test]
    fn persian_round_trip_all_months() {
        for year in [1, 100, 474, 475, 1348, 1399, 1403, 1404, 2820, 5000, 9999] {
            for month in 1..=12 {
                let max_day = match month {
                    1..=6 => 31,
                    7..=11 => 30,
                    _ if is_persian_leap_year(year) => 30,
                    _ => 29,
                };
                for day in [1, 15, max_day] {
                    let jd = persian_to_jd(year, month, day);
                    assert_eq!(
                        jd_to_persian(jd),
                        (year, month, day),
                        "round trip failed for {year}/{month:02}/{day:02}"
                    );
                }
            }
        }
    }

    #[test]
    fn persian_leap_last_day_round_trip() {
        // last day of a leap year is 30 Esfand
        let jd = persian_to_jd(1399, 12, 30);
        assert_eq!(jd_to_persian(jd), (1399, 12, 30));
        assert_eq!(jd_to_persian(jd + 1.0), (1400, 1, 1));
    }

    #[test]
    fn islamic_known_dates() {
        // 2021-01-01 = 17 Jumada al-awwal 1442 (tabular)
        assert_eq!(jd_to_islamic(gregorian_to_jd(2021, 1, 1)), (1442, 5, 17));
        assert_eq!(jd_to_islamic(ISLAMIC_EPOCH), (1, 1, 1));
    }

    #[test]
    fn islamic_round_trip() {
        for year in [1, 100, 1000, 1442, 1500, 2000] {
            for month in 1..=12 {
                // odd tabular months have 30 days, even ones 29
                let max_day = if month % 2 == 1 { 30 } else { 29 };
                for day in [1, max_day] {
                    let jd = islamic_to_jd(year, month, day);
                    assert_eq!(
                        jd_to_islamic(jd),
                        (year, month, day),
                        "round trip failed for {year}/{month:02}/{day:02} AH"
                    );
                }
            }
        }
    }

    #[test]
    fn day_number_matches_fractional_scale() {
        // the integer count is the fractional JDN shifted by half a day
        for &(year, month, day) in &[
            (1, 1, 1),
            (1348, 10, 11),
            (1399, 10, 12),
            (1399, 12, 30),
            (1404, 1, 1),
        ] {
            let dn = persian_to_day_number(i64::from(year), month, day);
            let jd = persian_to_jd(year, month, day);
            assert_eq!(dn as f64, jd + 0.5, "scales disagree for {year}/{month}/{day}");
        }
    }

    #[test]
    fn day_number_round_trip() {
        for year in [1, 474, 1348, 1399, 1403, 1404, 9999] {
            for month in 1..=12 {
                let dn = persian_to_day_number(year, month, 1);
                assert_eq!(
                    day_number_to_persian(dn),
                    (year as i32, month, 1),
                    "round trip failed for {year}/{month:02}/01"
                );
            }
        }
    }

    #[test]
    fn day_number_unix_epoch() {
        assert_eq!(persian_to_day_number(1348, 10, 11), UNIX_EPOCH_DAY);
        assert_eq!(day_number_to_persian(UNIX_EPOCH_DAY), (1348, 10, 11));
    }

    #[test]
    fn persian_epoch_base_shift_below_zero() {
        // negative years use the 473 base; the two sides of the epoch
        // stay ordered, not overlapping
        let last_bce = persian_to_jd(-1, 12, 29);
        let first_ce = persian_to_jd(1, 1, 1);
        assert!(last_bce < first_ce);
        assert_eq!(jd_to_persian(first_ce), (1, 1, 1));
    }
}
