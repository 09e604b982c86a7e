//! Wall-clock access behind a trait so handlers never read ambient time.
//! Tests substitute a fixed implementation to pin the weekday.

use chrono::{Datelike, Local, Weekday};

/// Supplies the current local weekday.
pub trait Clock: Send + Sync {
    fn current_weekday(&self) -> Weekday;
}

/// Production clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_weekday(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Full English name of a weekday, including Sunday (which has no
/// timetable entry and therefore no `Day` value).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
