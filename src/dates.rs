//! Calendar helpers: neighbouring months and day-of-month ranges.
//!
//! Months are returned as two-digit, zero-padded strings ("01".."12"), the
//! form they take inside date-based table names and file names.

use chrono::{Datelike, Local};

/// Month before `date`'s month; January wraps to "12".
pub fn previous_month<D: Datelike>(date: &D) -> String {
    let month = if date.month() == 1 { 12 } else { date.month() - 1 };
    format!("{:02}", month)
}

/// Month after `date`'s month; December wraps to "01".
pub fn next_month<D: Datelike>(date: &D) -> String {
    format!("{:02}", date.month() % 12 + 1)
}

/// True if `date`'s day of month lies in `[min(low, high), max(low, high)]`.
///
/// Both bounds are inclusive and their order does not matter.
pub fn day_between<D: Datelike>(low: u32, high: u32, date: &D) -> bool {
    (low.min(high)..=low.max(high)).contains(&date.day())
}

pub fn previous_month_today() -> String {
    previous_month(&Local::now().date_naive())
}

pub fn next_month_today() -> String {
    next_month(&Local::now().date_naive())
}

pub fn day_between_today(low: u32, high: u32) -> bool {
    day_between(low, high, &Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, month, day).unwrap()
    }

    #[rstest]
    #[case(1, "12")]
    #[case(10, "09")]
    #[case(9, "08")]
    #[case(12, "11")]
    fn test_previous_month(#[case] month: u32, #[case] expected: &str) {
        assert_eq!(previous_month(&date(month, 8)), expected);
    }

    #[rstest]
    #[case(12, "01")]
    #[case(8, "09")]
    #[case(11, "12")]
    #[case(9, "10")]
    fn test_next_month(#[case] month: u32, #[case] expected: &str) {
        assert_eq!(next_month(&date(month, 8)), expected);
    }

    #[rstest]
    fn test_month_formulas_for_every_month() {
        for month in 1..=12u32 {
            let d = date(month, 1);
            assert_eq!(previous_month(&d), format!("{:02}", (month + 10) % 12 + 1));
            assert_eq!(next_month(&d), format!("{:02}", month % 12 + 1));
        }
    }

    #[rstest]
    #[case(10, 8, 12, false)]
    #[case(10, 8, 9, true)]
    #[case(10, 8, 5, false)]
    #[case(15, 30, 22, true)]
    #[case(1, 10, 1, true)]
    #[case(1, 10, 10, true)]
    fn test_day_between(
        #[case] low: u32,
        #[case] high: u32,
        #[case] day: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(day_between(low, high, &date(3, day)), expected);
    }

    #[rstest]
    fn test_day_between_is_symmetric() {
        for day in 1..=31u32 {
            let d = date(3, day);
            for (low, high) in [(1, 10), (8, 10), (15, 30), (5, 5)] {
                assert_eq!(day_between(low, high, &d), day_between(high, low, &d));
            }
        }
    }

    #[rstest]
    fn test_today_variants_are_well_formed() {
        let previous = previous_month_today();
        let next = next_month_today();
        assert_eq!(previous.len(), 2);
        assert_eq!(next.len(), 2);
        assert!(day_between_today(1, 31));
    }
}
