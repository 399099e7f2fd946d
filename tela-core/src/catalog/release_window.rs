use chrono::{Months, NaiveDate, Utc};

/// Whether a release date falls inside the rolling recency window
/// `[today - 1 calendar month, today]`, both ends inclusive.
///
/// The window start is a calendar-month subtraction, not a 30-day duration:
/// on 2024-03-15 it opens at 2024-02-15. Chrono clamps overflowing days to
/// the end of the shorter month (2024-03-31 opens at 2024-02-29). A missing
/// date is never recent.
pub fn is_recent_release(release_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(date) = release_date else {
        return false;
    };
    let window_start = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);
    date >= window_start && date <= today
}

/// [`is_recent_release`] evaluated against the current UTC date.
pub fn is_recent_release_now(release_date: Option<NaiveDate>) -> bool {
    is_recent_release(release_date, Utc::now().date_naive())
}
