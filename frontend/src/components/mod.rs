pub mod booking_form;
pub mod calendar;
pub mod carousel;
pub mod navbar;
