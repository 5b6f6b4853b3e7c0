pub mod booking;

pub use booking::{booking_form, booking_page, BookingPageVm};
