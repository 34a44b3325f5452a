pub mod month_calendar;

pub use month_calendar::*;
