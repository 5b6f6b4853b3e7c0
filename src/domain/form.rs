// src/domain/form.rs

use crate::domain::booking::{BookingQuote, DateRange, GuestDetails};
use crate::domain::calendar::{at_midnight, is_check_in_disabled, is_check_out_disabled};
use crate::domain::catalog::RoomCatalog;
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Wire format of `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    Passport,
}

impl GuestField {
    pub const ALL: [GuestField; 5] = [
        GuestField::FirstName,
        GuestField::LastName,
        GuestField::Email,
        GuestField::Phone,
        GuestField::Passport,
    ];

    /// Name of the form input carrying this field.
    pub fn input_name(self) -> &'static str {
        match self {
            GuestField::FirstName => "firstName",
            GuestField::LastName => "lastName",
            GuestField::Email => "email",
            GuestField::Phone => "phone",
            GuestField::Passport => "passport",
        }
    }
}

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectCheckIn(NaiveDate),
    SelectCheckOut(NaiveDate),
    SelectRoom(String),
    EditField(GuestField, String),
    ClearDates,
}

/// Snapshot of everything typed or picked so far.
///
/// Never mutated in place: each interaction produces a new snapshot via
/// [`BookingForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub dates: DateRange,
    pub room_id: Option<String>,
    pub guest: GuestDetails,
    today: NaiveDate,
}

impl BookingForm {
    /// A fresh form. Catalog pages start with the first room selected.
    pub fn new(catalog: &RoomCatalog, today: NaiveDate) -> Self {
        Self {
            dates: DateRange::default(),
            room_id: catalog.first().map(|room| room.id.clone()),
            guest: GuestDetails::default(),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn apply(self, event: FormEvent) -> Self {
        let mut next = self;

        match event {
            FormEvent::SelectCheckIn(date) => {
                if is_check_in_disabled(date, next.today) {
                    debug!(%date, "ignoring past check-in date");
                } else {
                    next.dates.check_in = Some(at_midnight(date));
                }
            }
            FormEvent::SelectCheckOut(date) => {
                if is_check_out_disabled(date, next.dates.check_in) {
                    debug!(%date, "ignoring check-out not after check-in");
                } else {
                    next.dates.check_out = Some(at_midnight(date));
                }
            }
            FormEvent::SelectRoom(id) => next.room_id = Some(id),
            FormEvent::EditField(field, value) => {
                let slot = match field {
                    GuestField::FirstName => &mut next.guest.first_name,
                    GuestField::LastName => &mut next.guest.last_name,
                    GuestField::Email => &mut next.guest.email,
                    GuestField::Phone => &mut next.guest.phone,
                    GuestField::Passport => &mut next.guest.passport_number,
                };
                *slot = value;
            }
            FormEvent::ClearDates => next.dates = DateRange::default(),
        }

        next
    }

    pub fn guest_value(&self, field: GuestField) -> &str {
        match field {
            GuestField::FirstName => &self.guest.first_name,
            GuestField::LastName => &self.guest.last_name,
            GuestField::Email => &self.guest.email,
            GuestField::Phone => &self.guest.phone,
            GuestField::Passport => &self.guest.passport_number,
        }
    }

    pub fn quote(&self, catalog: &RoomCatalog) -> BookingQuote {
        BookingQuote::compute(&self.dates, self.room_id.as_deref(), catalog)
    }

    /// Rebuild a snapshot from urlencoded name/value pairs.
    ///
    /// Events are replayed in the order the page would produce them (room,
    /// check-in, check-out, then text fields), so the picker rules see the
    /// check-in before judging the check-out. Empty date values stay unset.
    pub fn from_pairs<I, K, V>(
        pairs: I,
        catalog: &RoomCatalog,
        today: NaiveDate,
    ) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let values: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();

        let mut events = Vec::new();

        if let Some(room) = values.get("room").filter(|r| !r.is_empty()) {
            events.push(FormEvent::SelectRoom(room.clone()));
        }
        if let Some(date) = parse_date_field(&values, "checkIn")? {
            events.push(FormEvent::SelectCheckIn(date));
        }
        if let Some(date) = parse_date_field(&values, "checkOut")? {
            events.push(FormEvent::SelectCheckOut(date));
        }
        for field in GuestField::ALL {
            if let Some(value) = values.get(field.input_name()) {
                events.push(FormEvent::EditField(field, value.clone()));
            }
        }

        Ok(events
            .into_iter()
            .fold(Self::new(catalog, today), BookingForm::apply))
    }
}

fn parse_date_field(
    values: &HashMap<String, String>,
    name: &str,
) -> Result<Option<NaiveDate>, ServerError> {
    let Some(raw) = values.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|e| ServerError::BadRequest(format!("invalid {name} date '{raw}': {e}")))
}
