use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use actix_web::{error::ErrorInternalServerError, web};
use tracing::error;

use crate::service::attendance::AttendanceLedger;
use crate::service::employee::EmployeeDirectory;
use crate::service::leave::LeaveTracker;

/// All service state, behind a single process-wide lock. Every operation is
/// short and synchronous, and the attendance invariants (one record per
/// employee per date, one clock-in before one clock-out) require writers to
/// be serialized, so one lock over the whole state is sufficient.
#[derive(Debug, Default)]
pub struct AppState {
    pub directory: EmployeeDirectory,
    pub ledger: AttendanceLedger,
    pub leaves: LeaveTracker,
}

pub type SharedState = RwLock<AppState>;

pub fn read_state(data: &web::Data<SharedState>) -> actix_web::Result<RwLockReadGuard<'_, AppState>> {
    data.read().map_err(|e| {
        error!(error = %e, "state lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}

pub fn write_state(
    data: &web::Data<SharedState>,
) -> actix_web::Result<RwLockWriteGuard<'_, AppState>> {
    data.write().map_err(|e| {
        error!(error = %e, "state lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}
