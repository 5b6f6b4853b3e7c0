use crate::errors::ServerError;
use crate::router::handle_on;
use crate::tests::utils::{body_string, catalog_app, flat_app, get, test_today};

#[test]
fn booking_page_loads() {
    let app = catalog_app();

    let resp = handle_on(get("/"), &app, test_today()).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Гранд Отель"));
    assert!(body.contains("action=\"/book\""));
    assert!(body.contains("Выберите дату"));
    // first room preselected
    assert!(body.contains("value=\"standard\" checked"));
    assert!(body.contains("Люкс"));
}

#[test]
fn check_in_picker_starts_today_and_check_out_waits() {
    let app = catalog_app();

    let body = body_string(handle_on(get("/"), &app, test_today()).unwrap());

    assert!(body.contains("min=\"2024-06-01\""));
    assert!(body.contains("name=\"checkOut\" value=\"\" disabled"));
}

#[test]
fn query_string_prefills_form_and_quote() {
    let app = catalog_app();

    let resp = handle_on(
        get("/?checkIn=2024-06-10&checkOut=2024-06-13&room=standard"),
        &app,
        test_today(),
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("10 июня 2024"));
    assert!(body.contains("13 июня 2024"));
    assert!(body.contains("min=\"2024-06-11\""));
    assert!(body.contains("10\u{a0}500 ₽"));
    assert!(body.contains("3 ночи"));
}

#[test]
fn flat_page_has_no_room_picker() {
    let app = flat_app();

    let body = body_string(handle_on(get("/"), &app, test_today()).unwrap());

    assert!(!body.contains("name=\"room\""));
    assert!(body.contains("5\u{a0}500 ₽"));
}

#[test]
fn form_fragment_is_partial() {
    let app = catalog_app();

    let resp = handle_on(
        get("/form?checkIn=2024-06-10&checkOut=2024-06-12&room=suite"),
        &app,
        test_today(),
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("id=\"booking-form\""));
    assert!(body.contains("24\u{a0}000 ₽"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn unknown_path_is_not_found() {
    let app = catalog_app();

    let err = handle_on(get("/admin"), &app, test_today()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(err.status(), 404);
}

#[test]
fn malformed_date_is_bad_request() {
    let app = catalog_app();

    let err = handle_on(get("/?checkIn=tomorrow"), &app, test_today()).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn error_page_renders_status() {
    let resp = crate::templates::html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Ошибка 404"));
}
