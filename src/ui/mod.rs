pub mod calendar;
pub mod messages;
