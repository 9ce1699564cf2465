use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::error::AmsError;
use crate::service::{parse_iso_date, report};
use crate::state::{SharedState, read_state};

#[derive(Deserialize, IntoParams)]
pub struct MonthQuery {
    /// Calendar month, `YYYY-MM`.
    pub month: String,
}

#[derive(Deserialize, IntoParams)]
pub struct RangeQuery {
    /// Range start, `YYYY-MM-DD`.
    pub start: String,
    /// Range end (inclusive), `YYYY-MM-DD`.
    pub end: String,
}

fn parse_year_month(value: &str) -> Result<(i32, u32), AmsError> {
    let invalid =
        || AmsError::InvalidArgument(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Total hours worked in one calendar month
#[utoipa::path(
    get,
    path = "/api/v1/reports/{employee_id}/monthly",
    params(
        ("employee_id" = u64, Path, description = "Employee id"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "Summed hours for the month", body = Object, example = json!({
            "employee_id": 1,
            "month": "2026-03",
            "total_hours": 38.5
        })),
        (status = 400, description = "Malformed month"),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Reports"
)]
pub async fn monthly_hours(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
    query: web::Query<MonthQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let (year, month) = parse_year_month(&query.month)?;

    let state = read_state(&data)?;
    state.directory.ensure_exists(employee_id)?;

    let total = report::monthly_hours(&state.ledger, employee_id, year, month);
    Ok(HttpResponse::Ok().json(json!({
        "employee_id": employee_id,
        "month": query.month,
        "total_hours": total
    })))
}

/// Attendance records over an inclusive date range, date ascending
#[utoipa::path(
    get,
    path = "/api/v1/reports/{employee_id}/range",
    params(
        ("employee_id" = u64, Path, description = "Employee id"),
        RangeQuery
    ),
    responses(
        (status = 200, description = "Matching records", body = Object, example = json!({
            "data": [],
            "total": 0
        })),
        (status = 400, description = "Malformed or inverted range"),
        (status = 404, description = "Unknown employee")
    ),
    tag = "Reports"
)]
pub async fn range_report(
    data: web::Data<SharedState>,
    path: web::Path<u64>,
    query: web::Query<RangeQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let start = parse_iso_date(&query.start)?;
    let end = parse_iso_date(&query.end)?;
    // The reporting engine itself does not validate ranges; its caller does.
    if end < start {
        return Err(AmsError::InvalidArgument(
            "End date must be on or after start date".to_string(),
        )
        .into());
    }

    let state = read_state(&data)?;
    state.directory.ensure_exists(employee_id)?;

    let records = report::range_report(&state.ledger, employee_id, start, end);
    Ok(HttpResponse::Ok().json(json!({
        "total": records.len(),
        "data": records
    })))
}

#[cfg(test)]
mod tests {
    use super::parse_year_month;

    #[test]
    fn parses_well_formed_months() {
        assert_eq!(parse_year_month("2026-03").unwrap(), (2026, 3));
        assert_eq!(parse_year_month("1999-12").unwrap(), (1999, 12));
    }

    #[test]
    fn rejects_malformed_months() {
        for bad in ["2026", "2026-13", "2026-00", "march", "2026/03"] {
            assert!(parse_year_month(bad).is_err(), "{} should be rejected", bad);
        }
    }
}
