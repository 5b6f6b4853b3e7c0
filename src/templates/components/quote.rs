use crate::domain::booking::BookingQuote;
use crate::locale::{format_number, format_rubles, nights_word};
use maud::{html, Markup};

/// Price summary under the form.
pub fn quote_card(quote: &BookingQuote) -> Markup {
    html! {
        div id="quote-card" class="space-y-4" {
            @if quote.nights > 0 {
                div class="p-4 bg-gradient-to-r from-purple-100 to-pink-100 rounded-lg" {
                    span class="text-gray-700 font-medium" { "Ваше пребывание: " }
                    span class="text-2xl font-bold text-purple-700" {
                        (quote.nights) " " (nights_word(quote.nights))
                    }
                }
            }
            div class="flex items-center justify-between text-lg" {
                span class="text-gray-700" { "Цена за ночь:" }
                span class="font-semibold text-purple-700" data-field="pricePerNight" { (format_rubles(quote.price_per_night)) }
            }
            div class="flex items-center justify-between text-lg" {
                span class="text-gray-700" { "Количество ночей:" }
                span class="font-semibold text-purple-700" data-field="nights" { (format_number(quote.nights)) }
            }
            div class="h-px bg-gradient-to-r from-transparent via-purple-300 to-transparent" {}
            div class="flex items-center justify-between text-2xl" {
                span class="font-bold text-gray-800" { "Итого:" }
                span class="font-bold text-purple-700" data-field="totalPrice" { (format_rubles(quote.total_price)) }
            }
        }
    }
}
