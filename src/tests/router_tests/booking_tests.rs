use crate::domain::submission::{
    ACCEPTED_TITLE, INCOMPLETE_PROFILE_MESSAGE, MISSING_DATES_MESSAGE,
};
use crate::errors::ServerError;
use crate::router::handle_on;
use crate::tests::utils::{
    body_string, booking_pairs, catalog_app, flat_app, post_form, test_today, FULL_GUEST,
};

#[test]
fn missing_dates_shows_error_toast() {
    let app = catalog_app();

    let resp = handle_on(post_form("/book", &FULL_GUEST), &app, test_today())
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("data-variant=\"destructive\""));
    assert!(body.contains("Ошибка"));
    assert!(body.contains(MISSING_DATES_MESSAGE));
    // entered values survive the round trip
    assert!(body.contains("value=\"Иван\""));
}

#[test]
fn empty_first_name_is_incomplete() {
    let app = catalog_app();
    let mut pairs = booking_pairs("2024-06-10", "2024-06-13", "standard");
    pairs.retain(|(k, _)| *k != "firstName");
    pairs.push(("firstName", ""));

    let body = body_string(handle_on(post_form("/book", &pairs), &app, test_today()).unwrap());

    assert!(body.contains(INCOMPLETE_PROFILE_MESSAGE));
    assert!(!body.contains(MISSING_DATES_MESSAGE));
}

#[test]
fn complete_booking_is_acknowledged() {
    let app = catalog_app();
    let pairs = booking_pairs("2024-06-10", "2024-06-12", "suite");

    let body = body_string(handle_on(post_form("/book", &pairs), &app, test_today()).unwrap());

    assert!(body.contains(ACCEPTED_TITLE));
    assert!(body.contains("data-variant=\"default\""));
    assert!(body.contains(
        "Иван, ваше бронирование номера «Люкс» с 10 июня по 12 июня подтверждено"
    ));
    assert!(body.contains("24\u{a0}000 ₽"));
}

#[test]
fn flat_booking_confirmation_omits_room() {
    let app = flat_app();
    let pairs = booking_pairs("2024-06-10", "2024-06-13", "");

    let body = body_string(handle_on(post_form("/book", &pairs), &app, test_today()).unwrap());

    assert!(body.contains("Иван, ваше бронирование с 10 июня по 13 июня подтверждено"));
    assert!(body.contains("16\u{a0}500 ₽"));
}

#[test]
fn past_check_in_counts_as_missing() {
    let app = catalog_app();
    let pairs = booking_pairs("2024-05-20", "2024-05-25", "standard");

    let body = body_string(handle_on(post_form("/book", &pairs), &app, test_today()).unwrap());

    assert!(body.contains(MISSING_DATES_MESSAGE));
}

#[test]
fn oversized_form_is_rejected_not_truncated() {
    let app = catalog_app();
    let comment = "x".repeat(17 * 1024);
    let mut pairs = vec![("comment", comment.as_str())];
    pairs.extend(booking_pairs("2024-06-10", "2024-06-13", "standard"));

    let err = handle_on(post_form("/book", &pairs), &app, test_today()).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(ref msg) if msg == "form body too large"));
    assert_eq!(err.status(), 400);
}

#[test]
fn form_just_under_limit_is_still_accepted() {
    let app = catalog_app();
    let comment = "x".repeat(15 * 1024);
    let mut pairs = vec![("comment", comment.as_str())];
    pairs.extend(booking_pairs("2024-06-10", "2024-06-13", "standard"));

    let body = body_string(handle_on(post_form("/book", &pairs), &app, test_today()).unwrap());

    assert!(body.contains(ACCEPTED_TITLE));
}
