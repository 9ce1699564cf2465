use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// A request starts PENDING and transitions exactly once to APPROVED or
/// REJECTED; both outcomes are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "request_id": 1,
        "employee_id": 1,
        "start_date": "2026-02-02",
        "end_date": "2026-02-04",
        "reason": "Family visit",
        "status": "PENDING"
    })
)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub request_id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2026-02-02", format = "date", value_type = String)]
    pub start_date: NaiveDate,

    #[schema(example = "2026-02-04", format = "date", value_type = String)]
    pub end_date: NaiveDate,

    #[schema(example = "Family visit")]
    pub reason: String,

    #[schema(example = "PENDING")]
    pub status: LeaveStatus,
}
