pub mod time_of_day;

pub use time_of_day::{format_minutes, minutes_or_midnight, parse_time_of_day, MINUTES_PER_DAY};
