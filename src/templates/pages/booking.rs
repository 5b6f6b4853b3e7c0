// templates/pages/booking.rs

use crate::domain::calendar::{check_in_min, check_out_min};
use crate::domain::catalog::RoomCatalog;
use crate::domain::form::{BookingForm, GuestField};
use crate::notifications::Toast;
use crate::templates::components::{
    card, date_field, icon, quote_card, room_card, submit_button, toast_region,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BookingPageVm<'a> {
    pub form: &'a BookingForm,
    pub catalog: &'a RoomCatalog,
    pub toasts: &'a [Toast],
}

struct GuestInput {
    field: GuestField,
    label: &'static str,
    icon: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    wide: bool,
}

const GUEST_FIELDS: [GuestInput; 5] = [
    GuestInput {
        field: GuestField::FirstName,
        label: "Имя",
        icon: "User",
        input_type: "text",
        placeholder: "Иван",
        wide: false,
    },
    GuestInput {
        field: GuestField::LastName,
        label: "Фамилия",
        icon: "User",
        input_type: "text",
        placeholder: "Иванов",
        wide: false,
    },
    GuestInput {
        field: GuestField::Email,
        label: "Email",
        icon: "Mail",
        input_type: "email",
        placeholder: "ivan@example.com",
        wide: false,
    },
    GuestInput {
        field: GuestField::Phone,
        label: "Телефон",
        icon: "Phone",
        input_type: "tel",
        placeholder: "+7 (999) 123-45-67",
        wide: false,
    },
    GuestInput {
        field: GuestField::Passport,
        label: "Паспортные данные",
        icon: "CreditCard",
        input_type: "text",
        placeholder: "1234 567890",
        wide: true,
    },
];

pub fn booking_page(vm: &BookingPageVm) -> Markup {
    desktop_layout(
        "Бронирование",
        html! {
            (toast_region(vm.toasts))
            (booking_form(vm))
        },
    )
}

/// The whole form. Re-fetched from `/form` on every change so the picker
/// limits and the quote follow what was just selected.
pub fn booking_form(vm: &BookingPageVm) -> Markup {
    let form = vm.form;
    let quote = form.quote(vm.catalog);

    html! {
        form
            id="booking-form"
            method="post"
            action="/book"
            hx-get="/form"
            hx-trigger="change"
            hx-target="this"
            hx-swap="outerHTML"
            class="max-w-5xl mx-auto space-y-6"
        {
            @if !vm.catalog.is_flat() {
                (card("BedDouble", "Выберите номер", "Какой номер вам подходит?", html! {
                    div class="grid md:grid-cols-3 gap-6" {
                        @for room in &vm.catalog.rooms {
                            (room_card(room, form.room_id.as_deref() == Some(room.id.as_str())))
                        }
                    }
                }))
            }

            (card("Calendar", "Выберите даты", "Когда планируете остановиться?", html! {
                div class="grid md:grid-cols-2 gap-6" {
                    (date_field("checkIn", "Дата заезда", form.dates.check_in, Some(check_in_min(form.today()))))
                    (date_field("checkOut", "Дата выезда", form.dates.check_out, check_out_min(form.dates.check_in)))
                }
            }))

            (card("User", "Данные постояльца", "Укажите информацию о госте", guest_fields(form)))

            section class="shadow-xl border-2 border-purple-200 rounded-xl bg-gradient-to-br from-purple-50 to-pink-50 p-6" {
                (quote_card(&quote))
                (submit_button("Забронировать номер"))
            }
        }
    }
}

fn guest_fields(form: &BookingForm) -> Markup {
    html! {
        div class="grid md:grid-cols-2 gap-6" {
            @for guest_input in &GUEST_FIELDS {
                @let name = guest_input.field.input_name();
                div class=(if guest_input.wide { "space-y-2 md:col-span-2" } else { "space-y-2" }) {
                    label for=(name) class="text-base font-semibold text-gray-700 flex items-center gap-2" {
                        (icon(guest_input.icon, 16))
                        (guest_input.label)
                    }
                    input
                        id=(name)
                        name=(name)
                        type=(guest_input.input_type)
                        value=(form.guest_value(guest_input.field))
                        placeholder=(guest_input.placeholder)
                        class="w-full h-12 border-2 rounded-md px-3";
                }
            }
        }
    }
}
