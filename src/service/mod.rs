pub mod attendance;
pub mod employee;
pub mod leave;
pub mod report;

use chrono::NaiveDate;

use crate::error::{AmsError, AmsResult};

/// Parses an ISO `YYYY-MM-DD` calendar date collected from the caller.
pub fn parse_iso_date(value: &str) -> AmsResult<NaiveDate> {
    value.parse::<NaiveDate>().map_err(|_| {
        AmsError::InvalidArgument(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}
