use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::model::attendance::AttendanceRecord;
use crate::state::{SharedState, read_state, write_state};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct ClockRequest {
    #[schema(example = 1)]
    pub employee_id: u64,
}

#[derive(Deserialize, IntoParams)]
pub struct RecordQuery {
    /// Calendar date to look up, `YYYY-MM-DD`; defaults to today.
    #[param(example = "2026-01-05", value_type = String)]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
pub struct RecordListResponse {
    pub data: Vec<AttendanceRecord>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Clock-in endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance/clock-in",
    request_body = ClockRequest,
    responses(
        (status = 200, description = "Clocked in successfully", body = AttendanceRecord),
        (status = 400, description = "Already clocked in today", body = Object, example = json!({
            "message": "Already clocked in"
        })),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    data: web::Data<SharedState>,
    payload: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;
    let mut state = write_state(&data)?;
    let state = &mut *state;
    let record = state.ledger.clock_in(&state.directory, employee_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Clocked in successfully",
        "record": record
    })))
}

/// Clock-out endpoint
#[utoipa::path(
    post,
    path = "/api/v1/attendance/clock-out",
    request_body = ClockRequest,
    responses(
        (status = 200, description = "Clocked out; hours computed", body = AttendanceRecord),
        (status = 400, description = "No clock-in for today, or already clocked out", body = Object, example = json!({
            "message": "No clock-in found for today"
        })),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    data: web::Data<SharedState>,
    payload: web::Json<ClockRequest>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;
    let mut state = write_state(&data)?;
    let state = &mut *state;
    let record = state.ledger.clock_out(&state.directory, employee_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Clocked out successfully",
        "record": record
    })))
}

/// All attendance records of one employee, creation order
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{employee_id}/records",
    params(
        ("employee_id" = u64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Records for the employee", body = RecordListResponse),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Attendance"
)]
pub async fn employee_records(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let state = read_state(&data)?;
    state.directory.ensure_exists(employee_id)?;

    let records = state.ledger.records_for_employee(employee_id);
    Ok(HttpResponse::Ok().json(RecordListResponse {
        total: records.len(),
        data: records,
    }))
}

/// One employee's record for a single date (defaults to today)
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{employee_id}/record",
    params(
        ("employee_id" = u64, Path, description = "Employee id"),
        RecordQuery
    ),
    responses(
        (status = 200, description = "Record for the date", body = AttendanceRecord),
        (status = 404, description = "Unknown employee, or no record on that date", body = Object, example = json!({
            "message": "No record for 2026-01-05"
        }))
    ),
    tag = "Attendance"
)]
pub async fn record_by_date(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
    query: web::Query<RecordQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());

    let state = read_state(&data)?;
    state.directory.ensure_exists(employee_id)?;

    match state.ledger.record_for(employee_id, date) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": format!("No record for {}", date)
        }))),
    }
}
