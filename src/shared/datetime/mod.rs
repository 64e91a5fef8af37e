pub mod calendar;
pub mod error;
pub mod time;

pub use calendar::{Calendar, GregorianCalendar, days_in_month, is_leap_year};
pub use error::InputError;
pub use time::{Instant, TimeParser, truncate_subsec};
