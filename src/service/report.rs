use chrono::{Datelike, NaiveDate};

use crate::model::attendance::AttendanceRecord;
use crate::service::attendance::AttendanceLedger;

/// Total hours worked by one employee in one calendar month. Records without
/// a computed duration (still clocked in) contribute nothing; an empty month
/// is 0.0, not an error.
pub fn monthly_hours(
    ledger: &AttendanceLedger,
    employee_id: u64,
    year: i32,
    month: u32,
) -> f64 {
    ledger
        .records()
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .filter_map(|r| r.hours_worked)
        .sum()
}

/// All of one employee's records dated within `[start, end]` inclusive,
/// ordered by date ascending. Range validation (end before start) is the
/// caller's job; an inverted range simply matches nothing here.
pub fn range_report(
    ledger: &AttendanceLedger,
    employee_id: u64,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<AttendanceRecord> {
    let mut matched: Vec<AttendanceRecord> = ledger
        .records()
        .iter()
        .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
        .cloned()
        .collect();
    matched.sort_by_key(|r| r.date);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::Employee;
    use crate::service::employee::EmployeeDirectory;
    use chrono::NaiveDate;

    const EMP: u64 = 10;
    const OTHER: u64 = 11;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (EmployeeDirectory, AttendanceLedger) {
        let mut directory = EmployeeDirectory::new();
        for (id, email) in [(EMP, "a@company.com"), (OTHER, "b@company.com")] {
            directory
                .add(Employee {
                    id,
                    name: format!("Emp {}", id),
                    email: email.to_string(),
                    department: "IT".to_string(),
                })
                .unwrap();
        }
        (directory, AttendanceLedger::new())
    }

    fn work_shift(
        directory: &EmployeeDirectory,
        ledger: &mut AttendanceLedger,
        employee_id: u64,
        day: NaiveDate,
        hours: u32,
    ) {
        ledger
            .clock_in_at(directory, employee_id, day.and_hms_opt(9, 0, 0).unwrap())
            .unwrap();
        ledger
            .clock_out_at(
                directory,
                employee_id,
                day.and_hms_opt(9 + hours, 0, 0).unwrap(),
            )
            .unwrap();
    }

    #[test]
    fn monthly_hours_sums_only_that_month() {
        let (directory, mut ledger) = setup();
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 5), 8);
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 6), 4);
        work_shift(&directory, &mut ledger, EMP, date(2026, 4, 1), 6);
        work_shift(&directory, &mut ledger, OTHER, date(2026, 3, 5), 7);

        let total = monthly_hours(&ledger, EMP, 2026, 3);
        assert!((total - 12.0).abs() < 0.02, "got {}", total);
    }

    #[test]
    fn incomplete_records_contribute_zero() {
        let (directory, mut ledger) = setup();
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 5), 8);
        ledger
            .clock_in_at(&directory, EMP, date(2026, 3, 6).and_hms_opt(9, 0, 0).unwrap())
            .unwrap();

        let total = monthly_hours(&ledger, EMP, 2026, 3);
        assert!((total - 8.0).abs() < 0.02, "got {}", total);
    }

    #[test]
    fn empty_month_is_zero() {
        let (_, ledger) = setup();
        assert_eq!(monthly_hours(&ledger, EMP, 2026, 3), 0.0);
    }

    #[test]
    fn range_report_is_inclusive_and_date_ordered() {
        let (directory, mut ledger) = setup();
        // Inserted out of date order on purpose.
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 10), 8);
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 2), 4);
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 20), 6);
        work_shift(&directory, &mut ledger, OTHER, date(2026, 3, 10), 5);

        let report = range_report(&ledger, EMP, date(2026, 3, 2), date(2026, 3, 10));
        let dates: Vec<NaiveDate> = report.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2026, 3, 2), date(2026, 3, 10)]);
        assert!(report.iter().all(|r| r.employee_id == EMP));
    }

    #[test]
    fn range_report_empty_when_nothing_matches() {
        let (directory, mut ledger) = setup();
        work_shift(&directory, &mut ledger, EMP, date(2026, 3, 10), 8);

        let report = range_report(&ledger, EMP, date(2026, 4, 1), date(2026, 4, 30));
        assert!(report.is_empty());
    }
}
