pub mod business_calendar;
pub mod holiday_api;
pub mod holiday_calendar;
pub mod projection;
pub mod sla_service;

pub use business_calendar::BusinessCalendar;
pub use holiday_api::HolidayApiProvider;
pub use holiday_calendar::HolidayCalendar;
pub use projection::SlaProjector;
pub use sla_service::SlaService;
