use crate::api::attendance::{ClockRequest, RecordListResponse};
use crate::api::employee::{CreateEmployee, EmployeeListResponse};
use crate::api::leave_request::{CreateLeave, LeaveListResponse};
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Management System API",
        version = "1.0.0",
        description = r#"
## Attendance Management System

In-memory attendance tracking for a single organization.

### Key Features
- **Employee Directory**
  - Register employees (unique id and email), list and look them up
- **Attendance**
  - Daily clock-in / clock-out with computed hours worked
- **Leave Management**
  - Apply for leave, approve/reject pending requests, view history
- **Reports**
  - Monthly hour totals and date-range attendance listings

All state lives in process memory and is discarded on restart.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,

        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::employee_records,
        crate::api::attendance::record_by_date,

        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::employee_leaves,

        crate::api::report::monthly_hours,
        crate::api::report::range_report
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeListResponse,
            AttendanceRecord,
            ClockRequest,
            RecordListResponse,
            LeaveRequest,
            LeaveStatus,
            CreateLeave,
            LeaveListResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Clock-in/clock-out APIs"),
        (name = "Leave", description = "Leave request APIs"),
        (name = "Reports", description = "Read-only reporting APIs"),
    )
)]
pub struct ApiDoc;
