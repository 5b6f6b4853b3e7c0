use crate::router::handle_on;
use crate::tests::utils::{body_string, booking_pairs, catalog_app, get, post_form, test_today};
use serde_json::Value;

fn json(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("response is not JSON")
}

#[test]
fn quote_endpoint_computes_totals() {
    let app = catalog_app();

    let resp = handle_on(
        get("/api/quote?checkIn=2024-06-10&checkOut=2024-06-13&room=standard"),
        &app,
        test_today(),
    )
    .unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let quote = json(resp);
    assert_eq!(quote["nights"], 3);
    assert_eq!(quote["pricePerNight"], 3500);
    assert_eq!(quote["totalPrice"], 10500);
}

#[test]
fn quote_with_unknown_room_uses_default_rate() {
    let app = catalog_app();

    let quote = json(
        handle_on(
            get("/api/quote?checkIn=2024-06-10&checkOut=2024-06-11&room=penthouse"),
            &app,
            test_today(),
        )
        .unwrap(),
    );

    assert_eq!(quote["pricePerNight"], 5500);
    assert_eq!(quote["totalPrice"], 5500);
}

#[test]
fn quote_without_dates_is_zero() {
    let app = catalog_app();

    let quote = json(handle_on(get("/api/quote"), &app, test_today()).unwrap());

    assert_eq!(quote["nights"], 0);
    assert_eq!(quote["totalPrice"], 0);
}

#[test]
fn rooms_endpoint_lists_catalog() {
    let app = catalog_app();

    let catalog = json(handle_on(get("/api/rooms"), &app, test_today()).unwrap());

    let ids: Vec<&str> = catalog["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|room| room["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["standard", "deluxe", "suite"]);
    assert_eq!(catalog["defaultRate"], 5500);
}

#[test]
fn api_book_reports_outcome() {
    let app = catalog_app();

    let reply = json(
        handle_on(
            post_form("/api/book", &booking_pairs("2024-06-10", "2024-06-13", "deluxe")),
            &app,
            test_today(),
        )
        .unwrap(),
    );
    assert_eq!(reply["outcome"], "accepted");
    assert_eq!(reply["toast"]["variant"], "default");
    assert_eq!(reply["quote"]["totalPrice"], 22500);

    let reply = json(
        handle_on(post_form("/api/book", &[("firstName", "Иван")]), &app, test_today()).unwrap(),
    );
    assert_eq!(reply["outcome"], "missing_dates");
    assert_eq!(reply["toast"]["title"], "Ошибка");
    assert_eq!(reply["toast"]["variant"], "destructive");
}

#[test]
fn health_check() {
    let app = catalog_app();

    let resp = handle_on(get("/health"), &app, test_today()).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}
