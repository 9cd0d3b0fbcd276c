use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime, Timelike};
use rand::Rng;
use regex::Regex;

use crate::calendar::DATE_TIME_FORMAT;

/// Nanosecond field appended to a second-resolution timestamp.
const ZERO_FRACTION: &str = "000000000";
/// The leading part of [`ZERO_FRACTION`] replaced by the random suffix.
const ZERO_RUN: &str = "000000";
/// Exclusive upper bound of the random suffix.
const SUFFIX_BOUND: u32 = 1_000_000;

static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(19[7-9]\d|2[01]\d\d)-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])",
        r" ([01]\d|2[0-3]):[0-5]\d:[0-5]\d\.\d{4,9}$",
    ))
    .expect("timestamp pattern is a valid regex")
});

/// Generates a timestamp for the current local time.
///
/// The result looks like `2024-01-15 09:30:00.482913000`. Two calls within
/// the same second collide only if they draw the same random suffix, so the
/// value is practically but not strictly unique.
pub fn generate() -> String {
    generate_at(Local::now().naive_local(), &mut rand::rng())
}

/// Generates a timestamp for `now` using `rng` for the sub-second suffix.
///
/// `now` is truncated to whole seconds and followed by a nine-digit zero
/// fraction, whose leading six-zero run is replaced by a number drawn from
/// `0..1_000_000` without padding. The fraction therefore has 4 to 9 digits.
pub fn generate_at<R: Rng>(now: NaiveDateTime, rng: &mut R) -> String {
    let now = now.with_nanosecond(0).unwrap_or(now);
    let suffix = rng.random_range(0..SUFFIX_BOUND).to_string();
    let fraction = ZERO_FRACTION.replacen(ZERO_RUN, &suffix, 1);
    format!("{}.{}", now.format(DATE_TIME_FORMAT), fraction)
}

/// Returns true if `s` has the shape of a generated timestamp.
///
/// This is a format check only: years 1970 to 2199, nominal month, day, hour,
/// minute and second bounds, and a 4 to 9 digit fraction. It does not check
/// that the date exists or that the value is unique.
///
/// # Examples
///
/// ```
/// use datekeeper_core::timestamp::{generate, is_well_formed};
///
/// assert!(is_well_formed(&generate()));
/// assert!(is_well_formed("2013-05-01 12:00:00.5000"));
/// assert!(!is_well_formed("2013-05-01 12:00:00"));
/// ```
pub fn is_well_formed(s: &str) -> bool {
    WELL_FORMED.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 5, 1)
            .unwrap()
            .and_hms_nano_opt(12, 34, 56, 789_000_000)
            .unwrap()
    }

    fn fraction(timestamp: &str) -> &str {
        timestamp.split_once('.').unwrap().1
    }

    #[test]
    fn test_generate_at_keeps_second_resolution_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let timestamp = generate_at(fixed_now(), &mut rng);
        assert!(timestamp.starts_with("2013-05-01 12:34:56."));
        assert!(is_well_formed(&timestamp));
    }

    #[test]
    fn test_generate_at_fraction_ends_with_three_zeros() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let timestamp = generate_at(fixed_now(), &mut rng);
            let digits = fraction(&timestamp);
            assert!((4..=9).contains(&digits.len()), "{timestamp}");
            assert!(digits.ends_with("000"), "{timestamp}");
        }
    }

    #[test]
    fn test_generate_is_well_formed() {
        for _ in 0..10_000 {
            let timestamp = generate();
            assert!(is_well_formed(&timestamp), "{timestamp}");
        }
    }

    #[test]
    fn test_generate_varies_within_a_second() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = generate_at(fixed_now(), &mut rng);
        let distinct = (0..100)
            .map(|_| generate_at(fixed_now(), &mut rng))
            .filter(|t| *t != first)
            .count();
        assert!(distinct > 0);
    }

    #[test]
    fn test_is_well_formed_accepts_fraction_lengths() {
        assert!(is_well_formed("1970-01-01 00:00:00.0000"));
        assert!(is_well_formed("2199-12-31 23:59:59.999999000"));
        assert!(is_well_formed("2024-02-29 10:15:30.123456"));
    }

    #[test]
    fn test_is_well_formed_rejects() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("1969-12-31 23:59:59.0000"));
        assert!(!is_well_formed("2200-01-01 00:00:00.0000"));
        assert!(!is_well_formed("2024-13-01 00:00:00.0000"));
        assert!(!is_well_formed("2024-01-32 00:00:00.0000"));
        assert!(!is_well_formed("2024-01-01 24:00:00.0000"));
        assert!(!is_well_formed("2024-01-01 00:60:00.0000"));
        assert!(!is_well_formed("2024-01-01 00:00:60.0000"));
        assert!(!is_well_formed("2024-01-01 00:00:00.000"));
        assert!(!is_well_formed("2024-01-01 00:00:00.0000000000"));
        assert!(!is_well_formed("2024-01-01 00:00:00.00.00"));
        assert!(!is_well_formed("2024-01-01T00:00:00.0000"));
    }
}
