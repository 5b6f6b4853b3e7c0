mod api_tests;
mod booking_tests;
mod page_tests;
