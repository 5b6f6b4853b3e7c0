// src/domain/submission.rs

use crate::domain::catalog::RoomCatalog;
use crate::domain::form::BookingForm;
use crate::domain::validation::{validate_submission, SubmissionOutcome};
use crate::locale::format_day_month;
use crate::notifications::{Notifier, Toast};
use tracing::info;

pub const ERROR_TITLE: &str = "Ошибка";
pub const MISSING_DATES_MESSAGE: &str = "Пожалуйста, выберите даты проживания";
pub const INCOMPLETE_PROFILE_MESSAGE: &str = "Заполните все поля формы";
pub const ACCEPTED_TITLE: &str = "Бронирование оформлено! 🎉";

/// Validate one submit attempt and tell the guest how it went.
///
/// Exactly one toast is raised per call. Nothing is stored: an accepted
/// booking is only acknowledged.
pub fn submit(
    form: &BookingForm,
    catalog: &RoomCatalog,
    notifier: &mut impl Notifier,
) -> SubmissionOutcome {
    let outcome = validate_submission(&form.dates, &form.guest);

    let toast = match outcome {
        SubmissionOutcome::MissingDates => Toast::error(ERROR_TITLE, MISSING_DATES_MESSAGE),
        SubmissionOutcome::IncompleteProfile => {
            Toast::error(ERROR_TITLE, INCOMPLETE_PROFILE_MESSAGE)
        }
        SubmissionOutcome::Accepted => Toast::success(ACCEPTED_TITLE, confirmation(form, catalog)),
    };

    info!(
        ?outcome,
        guest = %form.guest.first_name,
        room = form.room_id.as_deref().unwrap_or("-"),
        "booking submitted"
    );

    notifier.notify(toast);
    outcome
}

fn confirmation(form: &BookingForm, catalog: &RoomCatalog) -> String {
    let (check_in, check_out) = match form.dates.both() {
        Some((check_in, check_out)) => (format_day_month(&check_in), format_day_month(&check_out)),
        None => return String::new(),
    };

    let room = form.room_id.as_deref().and_then(|id| catalog.find(id));

    match room {
        Some(room) => format!(
            "{}, ваше бронирование номера «{}» с {} по {} подтверждено",
            form.guest.first_name, room.display_name, check_in, check_out
        ),
        None => format!(
            "{}, ваше бронирование с {} по {} подтверждено",
            form.guest.first_name, check_in, check_out
        ),
    }
}
