pub mod priority;
pub mod schedule;

pub use priority::Priority;
pub use schedule::{weekday_from_name, weekday_name, WeekdayWindow, WorkSchedule};
