use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::model::leave_request::LeaveRequest;
use crate::state::{SharedState, read_state, write_state};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = 1)]
    pub employee_id: u64,
    /// Leave start, `YYYY-MM-DD`.
    #[schema(example = "2026-02-02", format = "date", value_type = String)]
    pub start_date: String,
    /// Leave end (inclusive), `YYYY-MM-DD`.
    #[schema(example = "2026-02-04", format = "date", value_type = String)]
    pub end_date: String,
    #[schema(example = "Family visit")]
    pub reason: String,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Apply for leave
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body = CreateLeave,
    responses(
        (status = 200, description = "Request filed as PENDING", body = LeaveRequest),
        (status = 400, description = "Malformed or inverted date range"),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    data: web::Data<SharedState>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let mut state = write_state(&data)?;
    let state = &mut *state;
    let request = state.leaves.apply(
        &state.directory,
        payload.employee_id,
        &payload.start_date,
        &payload.end_date,
        &payload.reason,
    )?;

    Ok(HttpResponse::Ok().json(request))
}

/// Approve a pending leave request
#[utoipa::path(
    put,
    path = "/api/v1/leave/{request_id}/approve",
    params(
        ("request_id" = u64, Path, description = "Leave request id")
    ),
    responses(
        (status = 200, description = "Decision recorded (unknown or already-decided ids are left unchanged)", body = Object, example = json!({
            "message": "Leave updated"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    write_state(&data)?.leaves.decide(request_id, true);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave updated"
    })))
}

/// Reject a pending leave request
#[utoipa::path(
    put,
    path = "/api/v1/leave/{request_id}/reject",
    params(
        ("request_id" = u64, Path, description = "Leave request id")
    ),
    responses(
        (status = 200, description = "Decision recorded (unknown or already-decided ids are left unchanged)", body = Object, example = json!({
            "message": "Leave updated"
        }))
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    write_state(&data)?.leaves.decide(request_id, false);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave updated"
    })))
}

/// Fetch one leave request
#[utoipa::path(
    get,
    path = "/api/v1/leave/{request_id}",
    params(
        ("request_id" = u64, Path, description = "Leave request id")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    let state = read_state(&data)?;

    match state.leaves.find(request_id) {
        Some(request) => Ok(HttpResponse::Ok().json(request)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "Leave request not found"
        }))),
    }
}

/// All leave requests of one employee, creation order
#[utoipa::path(
    get,
    path = "/api/v1/leave/employee/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Requests for the employee", body = LeaveListResponse),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Leave"
)]
pub async fn employee_leaves(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let state = read_state(&data)?;
    state.directory.ensure_exists(employee_id)?;

    let requests = state.leaves.requests_for_employee(employee_id);
    Ok(HttpResponse::Ok().json(LeaveListResponse {
        total: requests.len(),
        data: requests,
    }))
}
