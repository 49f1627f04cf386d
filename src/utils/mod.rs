pub mod calendar;
pub mod datetime;
pub mod numerals;
