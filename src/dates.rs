use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days shown on the booking page, today included.
pub const WINDOW_DAYS: i64 = 7;

/// The bookable window: today through today+6, ascending.
pub fn booking_window(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS).map(|i| today + Duration::days(i)).collect()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
