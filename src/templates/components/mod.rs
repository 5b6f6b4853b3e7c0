use maud::{html, Markup};

pub mod date_field;
pub mod error;
pub mod quote;
pub mod room_card;
pub mod toast;

pub use date_field::date_field;
pub use error::html_error_response;
pub use quote::quote_card;
pub use room_card::room_card;
pub use toast::toast_region;

/// Icons are resolved client-side from their name.
pub fn icon(name: &str, size: u32) -> Markup {
    html! {
        span class="icon inline-block" data-icon=(name) style=(format!("width: {size}px; height: {size}px;")) aria-hidden="true" {}
    }
}

pub fn card(icon_name: &str, title: &str, description: &str, body: Markup) -> Markup {
    html! {
        section class="shadow-xl border-2 border-purple-100 rounded-xl bg-white" {
            div class="bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-t-xl p-6" {
                div class="flex items-center gap-3" {
                    (icon(icon_name, 28))
                    div {
                        h2 class="text-2xl font-semibold" { (title) }
                        p class="text-purple-100" { (description) }
                    }
                }
            }
            div class="p-6" {
                (body)
            }
        }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button
            type="submit"
            class="w-full mt-6 h-14 text-lg font-bold text-white rounded-lg bg-gradient-to-r from-purple-600 via-pink-600 to-purple-600 shadow-lg"
        {
            (icon("Check", 24))
            " " (label)
        }
    }
}
