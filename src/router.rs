use crate::app::App;
use crate::domain::form::BookingForm;
use crate::domain::submission::submit;
use crate::domain::{BookingQuote, SubmissionOutcome};
use crate::errors::{ResultResp, ServerError};
use crate::notifications::{Toast, ToastQueue};
use crate::responses::{html_response, json_response, text_response};
use crate::templates::pages::{booking_form, booking_page, BookingPageVm};
use astra::Request;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::io::Read;
use tracing::debug;

/// Submissions are a handful of short text fields.
const MAX_FORM_BYTES: u64 = 16 * 1024;

#[derive(Debug, Serialize)]
struct BookingReply {
    outcome: SubmissionOutcome,
    toast: Toast,
    quote: BookingQuote,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    handle_on(req, app, Local::now().date_naive())
}

/// Route a request as if it arrived on `today`, which drives the picker rules.
pub fn handle_on(req: Request, app: &App, today: NaiveDate) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let form = form_from_query(&req, app, today)?;
            render_page(app, &form, &[])
        }
        ("GET", "/form") => {
            let form = form_from_query(&req, app, today)?;
            html_response(booking_form(&BookingPageVm {
                form: &form,
                catalog: &app.catalog,
                toasts: &[],
            }))
        }
        ("POST", "/book") => {
            let form = form_from_body(req, app, today)?;
            let mut toasts = ToastQueue::new();
            submit(&form, &app.catalog, &mut toasts);
            render_page(app, &form, toasts.toasts())
        }

        ("GET", "/api/rooms") => json_response(&app.catalog),
        ("GET", "/api/quote") => {
            let form = form_from_query(&req, app, today)?;
            json_response(&form.quote(&app.catalog))
        }
        ("POST", "/api/book") => {
            let form = form_from_body(req, app, today)?;
            let mut toasts = ToastQueue::new();
            let outcome = submit(&form, &app.catalog, &mut toasts);
            let toast = toasts
                .into_vec()
                .pop()
                .ok_or(ServerError::InternalError)?;

            json_response(&BookingReply {
                outcome,
                toast,
                quote: form.quote(&app.catalog),
            })
        }

        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn render_page(app: &App, form: &BookingForm, toasts: &[Toast]) -> ResultResp {
    html_response(booking_page(&BookingPageVm {
        form,
        catalog: &app.catalog,
        toasts,
    }))
}

fn form_from_query(req: &Request, app: &App, today: NaiveDate) -> Result<BookingForm, ServerError> {
    let query = req.uri().query().unwrap_or("");
    BookingForm::from_pairs(url::form_urlencoded::parse(query.as_bytes()), &app.catalog, today)
}

fn form_from_body(req: Request, app: &App, today: NaiveDate) -> Result<BookingForm, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("failed to read form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    BookingForm::from_pairs(url::form_urlencoded::parse(&body), &app.catalog, today)
}
