use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::error::AmsError;
use crate::model::employee::Employee;
use crate::state::{SharedState, read_state, write_state};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Add an employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee added", body = Object, example = json!({
            "message": "Employee added successfully"
        })),
        (status = 409, description = "Duplicate id or email", body = Object, example = json!({
            "message": "Employee id 1 already exists"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    data: web::Data<SharedState>,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let mut state = write_state(&data)?;
    state.directory.add(Employee {
        id: payload.id,
        name: payload.name,
        email: payload.email,
        department: payload.department,
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee added successfully"
    })))
}

/// List employees in insertion order
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(data: web::Data<SharedState>) -> actix_web::Result<impl Responder> {
    let state = read_state(&data)?;
    let employees = state.directory.all().to_vec();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: employees.len(),
        data: employees,
    }))
}

/// Fetch one employee by id
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(
        ("id" = u64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee 1 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let state = read_state(&data)?;
    let employee = state
        .directory
        .find_by_id(id)
        .cloned()
        .ok_or(AmsError::EmployeeNotFound(id))?;

    Ok(HttpResponse::Ok().json(employee))
}
