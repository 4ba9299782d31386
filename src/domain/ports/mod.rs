pub mod holiday_provider;
pub mod schedule_repository;

pub use holiday_provider::HolidayProvider;
pub use schedule_repository::ScheduleRepository;
