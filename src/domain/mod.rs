pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod form;
pub mod submission;
pub mod validation;

pub use booking::BookingQuote;
pub use validation::SubmissionOutcome;
