// src/locale.rs
//
// The page only ever speaks Russian, so formatting lives here instead of
// going through a locale database.

use chrono::Datelike;

/// Genitive month names, as used after a day number ("10 июня").
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const GROUP_SEPARATOR: char = '\u{a0}';

fn month_name<D: Datelike>(date: &D) -> &'static str {
    MONTHS_GENITIVE[date.month0() as usize]
}

/// `dd MMMM`, e.g. "05 июня".
pub fn format_day_month<D: Datelike>(date: &D) -> String {
    format!("{:02} {}", date.day(), month_name(date))
}

/// `dd MMMM yyyy`, e.g. "05 июня 2024".
pub fn format_day_month_year<D: Datelike>(date: &D) -> String {
    format!("{} {}", format_day_month(date), date.year())
}

/// Digit grouping the way ru-RU renders integers: "10 500".
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

pub fn format_rubles(amount: i64) -> String {
    format!("{} ₽", format_number(amount))
}

/// Russian plural form for "night", picked by the usual 1 / 2-4 / 5+ rule.
pub fn nights_word(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    match (n % 10, n % 100) {
        (1, m) if m != 11 => "ночь",
        (2..=4, m) if !(12..=14).contains(&m) => "ночи",
        _ => "ночей",
    }
}
