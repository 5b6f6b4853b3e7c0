use crate::app::App;
use crate::config::AppConfig;
use crate::domain::catalog::RoomCatalog;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;

/// Day the router tests pretend it is, so the picker rules are stable.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn catalog_app() -> App {
    App::new(AppConfig::default(), RoomCatalog::builtin())
}

pub fn flat_app() -> App {
    App::new(AppConfig::default(), RoomCatalog::flat(5500))
}

pub fn encode(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(encode(pairs)))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub const FULL_GUEST: [(&str, &str); 5] = [
    ("firstName", "Иван"),
    ("lastName", "Иванов"),
    ("email", "ivan@example.com"),
    ("phone", "+7 (999) 123-45-67"),
    ("passport", "1234 567890"),
];

/// A complete submission with the given stay and room.
pub fn booking_pairs<'a>(
    check_in: &'a str,
    check_out: &'a str,
    room: &'a str,
) -> Vec<(&'a str, &'a str)> {
    let mut pairs = vec![("checkIn", check_in), ("checkOut", check_out), ("room", room)];
    pairs.extend(FULL_GUEST);
    pairs
}
