pub mod date;
pub mod path;
pub mod time;

pub use time::{format_timestamp, parse_timestamp};
