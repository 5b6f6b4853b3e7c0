use crate::config::HOTEL_NAME;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (HOTEL_NAME) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="min-h-screen bg-gradient-to-br from-purple-50 via-pink-50 to-purple-100" {
                div class="container mx-auto px-4 py-8 md:py-12" {
                    header class="text-center mb-8 md:mb-12" {
                        h1 class="text-4xl md:text-6xl font-bold bg-gradient-to-r from-purple-600 via-pink-600 to-purple-600 bg-clip-text text-transparent mb-3" {
                            (HOTEL_NAME)
                        }
                        p class="text-lg md:text-xl text-gray-600" { "Забронируйте свой идеальный отдых" }
                    }
                    (content)
                }
            }
        }
    }
}
