use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};
use serde_json::json;

/// Domain failures surfaced by the service layer. Every variant is a normal
/// return-path error; none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum AmsError {
    #[display(fmt = "Employee {} not found", _0)]
    EmployeeNotFound(#[error(not(source))] u64),

    #[display(fmt = "{}", _0)]
    DuplicateEmployee(#[error(not(source))] String),

    /// Clock-in/out state machine violation; the payload distinguishes
    /// "Already clocked in", "Already clocked out" and
    /// "No clock-in found for today".
    #[display(fmt = "{}", _0)]
    InvalidAttendance(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    InvalidArgument(#[error(not(source))] String),
}

impl ResponseError for AmsError {
    fn status_code(&self) -> StatusCode {
        match self {
            AmsError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            AmsError::DuplicateEmployee(_) => StatusCode::CONFLICT,
            AmsError::InvalidAttendance(_) | AmsError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

pub type AmsResult<T> = Result<T, AmsError>;
