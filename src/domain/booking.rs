// src/domain/booking.rs

use crate::domain::catalog::RoomCatalog;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::warn;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// The stay the guest picked. Either end may still be unset while the
/// form is being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Both ends, if both are set.
    pub fn both(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.check_in?, self.check_out?))
    }
}

/// Free-form guest fields. Nothing beyond non-emptiness is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
}

impl GuestDetails {
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.passport_number,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

/// Number of nights between two optional dates.
///
/// Uses raw time subtraction rounded up to whole days, so a stay that is a
/// few hours over N days counts as N + 1 nights. A reversed range is not
/// clamped here and comes out as zero or negative.
pub fn compute_nights(check_in: Option<NaiveDateTime>, check_out: Option<NaiveDateTime>) -> i64 {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return 0;
    };

    let millis = (check_out - check_in).num_milliseconds();
    ceil_div(millis, MILLIS_PER_DAY)
}

/// Saturates instead of overflowing; catalog rates are bounded at load, so
/// only a hand-built catalog can get near the limit.
pub fn compute_total(nights: i64, price_per_night: i64) -> i64 {
    nights.saturating_mul(price_per_night)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -((-numerator).div_euclid(denominator))
}

/// The nights / rate / total triple shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nights: i64,
    pub price_per_night: i64,
    pub total_price: i64,
}

impl BookingQuote {
    pub fn compute(dates: &DateRange, room_id: Option<&str>, catalog: &RoomCatalog) -> Self {
        let raw_nights = compute_nights(dates.check_in, dates.check_out);
        let nights = if raw_nights < 0 {
            warn!(
                nights = raw_nights,
                "check-out precedes check-in, quoting zero nights"
            );
            0
        } else {
            raw_nights
        };

        let price_per_night = catalog.resolve_rate(room_id);

        Self {
            nights,
            price_per_night,
            total_price: compute_total(nights, price_per_night),
        }
    }
}
