// src/domain/calendar.rs

use chrono::{Days, NaiveDate, NaiveDateTime};

/// Check-in can't be in the past. Today itself stays open for same-day stays.
pub fn is_check_in_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Check-out needs a chosen check-in and must land after it.
pub fn is_check_out_disabled(date: NaiveDate, check_in: Option<NaiveDateTime>) -> bool {
    match check_in {
        Some(check_in) => date <= check_in.date(),
        None => true,
    }
}

/// Earliest selectable check-in, for the picker's `min` attribute.
pub fn check_in_min(today: NaiveDate) -> NaiveDate {
    today
}

/// Earliest selectable check-out. `None` while check-in is unset.
pub fn check_out_min(check_in: Option<NaiveDateTime>) -> Option<NaiveDate> {
    check_in.and_then(|d| d.date().checked_add_days(Days::new(1)))
}

/// Dates come off the picker as local midnights.
pub fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
