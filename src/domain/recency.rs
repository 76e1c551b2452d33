use chrono::{Datelike, Months, NaiveDate};

/// First day of the oldest month still inside the window.
///
/// `0` and `1` both mean "the current month only"; every step above that
/// reaches one more calendar month back.
pub fn window_start(month_filter: u32, now: NaiveDate) -> NaiveDate {
    let first_day_of_month = now.with_day(1).unwrap_or(now);
    let months_back = month_filter.saturating_sub(1);

    first_day_of_month
        .checked_sub_months(Months::new(months_back))
        .unwrap_or(NaiveDate::MIN)
}

/// No upper bound: articles dated after `now` are kept.
pub fn is_within_window(month_filter: u32, article_date: NaiveDate, now: NaiveDate) -> bool {
    article_date >= window_start(month_filter, now)
}
