use tracing::{info, warn};

use crate::error::{AmsError, AmsResult};
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::service::employee::EmployeeDirectory;
use crate::service::parse_iso_date;

/// Leave requests keyed by a surrogate request id, held in creation order.
/// Each request moves PENDING → APPROVED or PENDING → REJECTED exactly once.
#[derive(Debug, Default)]
pub struct LeaveTracker {
    requests: Vec<LeaveRequest>,
    next_request_id: u64,
}

impl LeaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a new PENDING request. The dates arrive as the caller collected
    /// them (ISO strings); malformed input and inverted ranges are argument
    /// errors, checked only after the employee is known to exist.
    pub fn apply(
        &mut self,
        directory: &EmployeeDirectory,
        employee_id: u64,
        start_date: &str,
        end_date: &str,
        reason: &str,
    ) -> AmsResult<LeaveRequest> {
        directory.ensure_exists(employee_id)?;

        let start = parse_iso_date(start_date)?;
        let end = parse_iso_date(end_date)?;
        if end < start {
            return Err(AmsError::InvalidArgument(
                "End date must be on or after start date".to_string(),
            ));
        }

        self.next_request_id += 1;
        let request = LeaveRequest {
            request_id: self.next_request_id,
            employee_id,
            start_date: start,
            end_date: end,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
        };
        info!(request_id = request.request_id, employee_id, "leave request filed");
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Approves or rejects a PENDING request. Unknown ids and requests that
    /// already left PENDING are left untouched: the system has always treated
    /// both as silent no-ops rather than errors, so callers get no failure
    /// signal here, only a log line.
    pub fn decide(&mut self, request_id: u64, approve: bool) {
        match self.requests.iter_mut().find(|r| r.request_id == request_id) {
            Some(request) if request.status == LeaveStatus::Pending => {
                request.status = if approve {
                    LeaveStatus::Approved
                } else {
                    LeaveStatus::Rejected
                };
                info!(request_id, status = %request.status, "leave request decided");
            }
            Some(request) => {
                warn!(request_id, status = %request.status, "leave request already decided");
            }
            None => warn!(request_id, "leave request not found"),
        }
    }

    pub fn find(&self, request_id: u64) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.request_id == request_id)
    }

    /// All requests for one employee, in creation order.
    pub fn requests_for_employee(&self, employee_id: u64) -> Vec<LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::Employee;
    use std::str::FromStr;

    const EMP: u64 = 10;

    fn setup() -> (EmployeeDirectory, LeaveTracker) {
        let mut directory = EmployeeDirectory::new();
        directory
            .add(Employee {
                id: EMP,
                name: "Test Emp".to_string(),
                email: "testemp@example.com".to_string(),
                department: "IT".to_string(),
            })
            .unwrap();
        (directory, LeaveTracker::new())
    }

    #[test]
    fn apply_creates_pending_request() {
        let (directory, mut tracker) = setup();
        let request = tracker
            .apply(&directory, EMP, "2026-02-02", "2026-02-04", "Family visit")
            .unwrap();

        assert_eq!(request.request_id, 1);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.start_date.to_string(), "2026-02-02");
        assert_eq!(request.end_date.to_string(), "2026-02-04");
    }

    #[test]
    fn apply_unknown_employee_rejected() {
        let (directory, mut tracker) = setup();
        let err = tracker
            .apply(&directory, 9999, "2026-02-02", "2026-02-04", "x")
            .unwrap_err();
        assert_eq!(err, AmsError::EmployeeNotFound(9999));
    }

    #[test]
    fn apply_malformed_date_rejected() {
        let (directory, mut tracker) = setup();
        let err = tracker
            .apply(&directory, EMP, "02/02/2026", "2026-02-04", "x")
            .unwrap_err();
        assert!(matches!(err, AmsError::InvalidArgument(_)));
    }

    #[test]
    fn apply_inverted_range_rejected() {
        let (directory, mut tracker) = setup();
        let err = tracker
            .apply(&directory, EMP, "2026-02-04", "2026-02-02", "x")
            .unwrap_err();
        assert!(matches!(err, AmsError::InvalidArgument(_)));
        assert!(tracker.requests_for_employee(EMP).is_empty());
    }

    #[test]
    fn single_day_range_allowed() {
        let (directory, mut tracker) = setup();
        let request = tracker
            .apply(&directory, EMP, "2026-02-02", "2026-02-02", "Appointment")
            .unwrap();
        assert_eq!(request.start_date, request.end_date);
    }

    #[test]
    fn decide_approves_and_rejects() {
        let (directory, mut tracker) = setup();
        let a = tracker
            .apply(&directory, EMP, "2026-02-02", "2026-02-04", "a")
            .unwrap();
        let b = tracker
            .apply(&directory, EMP, "2026-03-02", "2026-03-04", "b")
            .unwrap();

        tracker.decide(a.request_id, true);
        tracker.decide(b.request_id, false);

        assert_eq!(tracker.find(a.request_id).unwrap().status, LeaveStatus::Approved);
        assert_eq!(tracker.find(b.request_id).unwrap().status, LeaveStatus::Rejected);
    }

    #[test]
    fn decide_unknown_request_is_a_no_op() {
        let (_, mut tracker) = setup();
        tracker.decide(42, true);
        assert!(tracker.find(42).is_none());
    }

    #[test]
    fn decided_request_stays_decided() {
        let (directory, mut tracker) = setup();
        let request = tracker
            .apply(&directory, EMP, "2026-02-02", "2026-02-04", "a")
            .unwrap();

        tracker.decide(request.request_id, true);
        tracker.decide(request.request_id, false);
        assert_eq!(
            tracker.find(request.request_id).unwrap().status,
            LeaveStatus::Approved
        );
    }

    #[test]
    fn requests_listed_in_creation_order() {
        let (directory, mut tracker) = setup();
        tracker
            .apply(&directory, EMP, "2026-02-02", "2026-02-04", "a")
            .unwrap();
        tracker
            .apply(&directory, EMP, "2026-01-01", "2026-01-02", "b")
            .unwrap();

        let ids: Vec<u64> = tracker
            .requests_for_employee(EMP)
            .iter()
            .map(|r| r.request_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn status_parses_from_wire_form() {
        assert_eq!(LeaveStatus::from_str("APPROVED").unwrap(), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::Pending.to_string(), "PENDING");
    }
}
