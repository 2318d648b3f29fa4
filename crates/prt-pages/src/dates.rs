//! Date arithmetic for the booking widget's default check-in.

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the next Friday strictly after `today`.
///
/// When `today` is itself a Friday the result is a full week out, never
/// the same day, so the widget always receives a future check-in date.
#[must_use]
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let days_from_sunday = today.weekday().num_days_from_sunday();
    let days_until = match (12 - days_from_sunday) % 7 {
        0 => 7,
        n => n,
    };
    today + Duration::days(i64::from(days_until))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn friday_advances_a_full_week() {
        // 2025-06-06 is a Friday.
        assert_eq!(next_friday(date(2025, 6, 6)), date(2025, 6, 13));
    }

    #[test]
    fn saturday_advances_six_days() {
        assert_eq!(next_friday(date(2025, 6, 7)), date(2025, 6, 13));
    }

    #[test]
    fn sunday_advances_five_days() {
        assert_eq!(next_friday(date(2025, 6, 8)), date(2025, 6, 13));
    }

    #[test]
    fn thursday_advances_one_day() {
        assert_eq!(next_friday(date(2025, 6, 5)), date(2025, 6, 6));
    }

    #[test]
    fn result_is_always_a_friday_and_in_the_future() {
        let start = date(2025, 1, 1);
        for offset in 0..14 {
            let today = start + Duration::days(offset);
            let friday = next_friday(today);
            assert_eq!(friday.weekday(), chrono::Weekday::Fri);
            assert!(friday > today);
        }
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        // 2025-12-27 is a Saturday; the next Friday is 2026-01-02.
        assert_eq!(next_friday(date(2025, 12, 27)), date(2026, 1, 2));
    }
}
