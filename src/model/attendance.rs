use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One employee's attendance for one calendar date.
///
/// `clock_out_time` and `hours_worked` stay `None` until the employee clocks
/// out; `hours_worked` is set exactly when both timestamps are present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub record_id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[schema(example = "2026-01-05T09:00:00", format = "date-time", value_type = String)]
    pub clock_in_time: Option<NaiveDateTime>,

    #[schema(example = "2026-01-05T17:30:00", format = "date-time", value_type = String)]
    pub clock_out_time: Option<NaiveDateTime>,

    /// Wall-clock difference between the two stamps, in fractional hours.
    #[schema(example = 8.5)]
    pub hours_worked: Option<f64>,
}

impl AttendanceRecord {
    pub fn new(record_id: u64, employee_id: u64, date: NaiveDate) -> Self {
        Self {
            record_id,
            employee_id,
            date,
            clock_in_time: None,
            clock_out_time: None,
            hours_worked: None,
        }
    }
}
