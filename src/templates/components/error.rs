use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match &err {
        ServerError::InternalError => error!("{err}"),
        _ => warn!("{err}"),
    }

    let message = match &err {
        ServerError::NotFound => "Страница не найдена".to_string(),
        ServerError::BadRequest(msg) => format!("Некорректный запрос: {msg}"),
        ServerError::InternalError => "Внутренняя ошибка сервера".to_string(),
    };

    render_error(err.status(), &message)
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Ошибка {status}"),
        html! {
            main class="max-w-xl mx-auto bg-white rounded-xl shadow p-8 text-center" {
                h2 class="text-2xl font-bold mb-4" { "Ошибка " (status) }
                p class="text-gray-600" { (message) }
                p class="mt-6" { a href="/" class="text-purple-700" { "← Вернуться к бронированию" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
