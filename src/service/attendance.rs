use std::collections::HashMap;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::info;

use crate::error::{AmsError, AmsResult};
use crate::model::attendance::AttendanceRecord;
use crate::service::employee::EmployeeDirectory;

/// Per-employee, per-date attendance state machine:
/// no record → clocked in → clocked out (terminal for that date).
///
/// Records live in an arena in creation order; `by_employee_date` maps each
/// (employee id, calendar date) pair to its arena slot, so there is at most
/// one record per employee per date. Overnight shifts are not supported:
/// a clock-out only ever looks at the record for its own calendar date.
#[derive(Debug, Default)]
pub struct AttendanceLedger {
    records: Vec<AttendanceRecord>,
    by_employee_date: HashMap<(u64, NaiveDate), usize>,
    next_record_id: u64,
}

impl AttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clocks the employee in at the current local time.
    pub fn clock_in(
        &mut self,
        directory: &EmployeeDirectory,
        employee_id: u64,
    ) -> AmsResult<AttendanceRecord> {
        self.clock_in_at(directory, employee_id, Local::now().naive_local())
    }

    /// Timestamp-injecting variant of [`clock_in`](Self::clock_in). The
    /// record's date is the calendar date of `now`.
    pub fn clock_in_at(
        &mut self,
        directory: &EmployeeDirectory,
        employee_id: u64,
        now: NaiveDateTime,
    ) -> AmsResult<AttendanceRecord> {
        directory.ensure_exists(employee_id)?;

        let date = now.date();
        let idx = match self.by_employee_date.get(&(employee_id, date)) {
            Some(&idx) => {
                if self.records[idx].clock_in_time.is_some() {
                    return Err(AmsError::InvalidAttendance("Already clocked in".to_string()));
                }
                idx
            }
            None => self.create_record(employee_id, date),
        };

        let record = &mut self.records[idx];
        record.clock_in_time = Some(now);
        info!(employee_id, %date, "clock-in recorded");
        Ok(record.clone())
    }

    /// Clocks the employee out at the current local time.
    pub fn clock_out(
        &mut self,
        directory: &EmployeeDirectory,
        employee_id: u64,
    ) -> AmsResult<AttendanceRecord> {
        self.clock_out_at(directory, employee_id, Local::now().naive_local())
    }

    /// Timestamp-injecting variant of [`clock_out`](Self::clock_out). Looks up
    /// the record for `now`'s calendar date only; an open record from a prior
    /// date is invisible here and the call fails as if no clock-in happened.
    pub fn clock_out_at(
        &mut self,
        directory: &EmployeeDirectory,
        employee_id: u64,
        now: NaiveDateTime,
    ) -> AmsResult<AttendanceRecord> {
        directory.ensure_exists(employee_id)?;

        let date = now.date();
        let idx = *self
            .by_employee_date
            .get(&(employee_id, date))
            .ok_or_else(|| {
                AmsError::InvalidAttendance("No clock-in found for today".to_string())
            })?;

        let record = &mut self.records[idx];
        if record.clock_out_time.is_some() {
            return Err(AmsError::InvalidAttendance("Already clocked out".to_string()));
        }
        let clock_in = record.clock_in_time.ok_or_else(|| {
            AmsError::InvalidAttendance("No clock-in found for today".to_string())
        })?;
        if now < clock_in {
            return Err(AmsError::InvalidArgument(
                "Clock-out time precedes clock-in time".to_string(),
            ));
        }

        let worked = now.signed_duration_since(clock_in);
        record.clock_out_time = Some(now);
        record.hours_worked = Some(worked.num_seconds() as f64 / 3600.0);
        info!(employee_id, %date, hours = record.hours_worked, "clock-out recorded");
        Ok(record.clone())
    }

    /// The record for one (employee, date) pair, if any. Pure read.
    pub fn record_for(&self, employee_id: u64, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.by_employee_date
            .get(&(employee_id, date))
            .map(|&idx| &self.records[idx])
    }

    /// All records for one employee across all dates, in creation order.
    pub fn records_for_employee(&self, employee_id: u64) -> Vec<AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }

    /// Every record in the ledger, creation order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    /// Administrative reset: discards every record and the date index.
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_employee_date.clear();
        self.next_record_id = 0;
    }

    fn create_record(&mut self, employee_id: u64, date: NaiveDate) -> usize {
        self.next_record_id += 1;
        let idx = self.records.len();
        self.records
            .push(AttendanceRecord::new(self.next_record_id, employee_id, date));
        self.by_employee_date.insert((employee_id, date), idx);
        idx
    }
}
