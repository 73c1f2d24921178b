//! Day-of-week computation
//!
//! Uses the integer congruence with a month offset table instead of a library
//! calendar routine, so the result only depends on the three date components.

use chrono::Weekday;

/// Month offsets for the congruence, January first
const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Day of the week for a proleptic Gregorian date
///
/// `month` must be in `1..=12` and `day` in `1..=31`; other values are not
/// checked and give a meaningless result (an out-of-range month panics on
/// the table lookup).
#[must_use]
pub fn weekday_of(year: i32, month: u32, day: u32) -> Weekday {
    // January and February count as months 13 and 14 of the previous year
    let y = if month < 3 { year - 1 } else { year };
    let t = MONTH_OFFSETS[(month as usize).wrapping_sub(1)];

    let h = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + t + day as i32)
        .rem_euclid(7);

    weekday_from_sunday(h as u8)
}

/// Map an index counted from Sunday (0) to a weekday
#[must_use]
pub fn weekday_from_sunday(index: u8) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use rstest::rstest;

    #[rstest]
    #[case(2024, 1, 1, Weekday::Mon)]
    #[case(2024, 2, 29, Weekday::Thu)]
    #[case(2000, 1, 1, Weekday::Sat)]
    #[case(1900, 3, 1, Weekday::Thu)]
    #[case(2100, 12, 31, Weekday::Fri)]
    #[case(1970, 1, 1, Weekday::Thu)]
    fn test_known_dates(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: Weekday,
    ) {
        assert_eq!(weekday_of(year, month, day), expected);
    }

    #[test]
    fn test_agrees_with_reference_calendar_1900_to_2100() {
        let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();

        while date <= end {
            assert_eq!(
                weekday_of(date.year(), date.month(), date.day()),
                date.weekday(),
                "mismatch on {date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_sunday_is_index_zero() {
        assert_eq!(weekday_of(2024, 6, 2).num_days_from_sunday(), 0);
        assert_eq!(weekday_from_sunday(6), Weekday::Sat);
    }
}
