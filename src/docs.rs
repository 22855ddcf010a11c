use crate::api::attendance::{AttendanceCheck, AttendanceListResponse, AttendanceRange};
use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeQuery, UpdateEmployee};
use crate::api::history::{HistoryResponse, StatsResponse};
use crate::api::leave_request::{CreateLeave, LeaveFilter, LeaveListResponse};
use crate::model::{AttendanceRecord, Employee, LeaveRequest, LeaveStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Store API",
        version = "0.1.0",
        description = r#"
## Human Resource Management (HRM) Store

An in-memory HR store backed by flat files, serving employees, leave
requests and attendance records.

### Key Features
- **Employee Management**
  - Create, update, list, view and delete employee records
- **Leave Management**
  - Submit leave, work through pending requests in arrival order, approve or reject
- **Attendance Management**
  - Daily check-in and check-out, date range reports
- **History**
  - Undo and redo employee changes and leave decisions

### Response Format
- JSON-based RESTful responses
- Every change is written back to the data files before the response is sent
"#,
    ),
    paths(
        crate::api::leave_request::leave_list,
        crate::api::leave_request::pending_list,
        crate::api::leave_request::next_pending,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::attendance_range,
        crate::api::attendance::employee_attendance,

        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::history::history_state,
        crate::api::history::undo,
        crate::api::history::redo,
        crate::api::history::stats
    ),
    components(
        schemas(
            Employee,
            LeaveRequest,
            LeaveStatus,
            AttendanceRecord,
            CreateEmployee,
            UpdateEmployee,
            EmployeeQuery,
            EmployeeListResponse,
            CreateLeave,
            LeaveFilter,
            LeaveListResponse,
            AttendanceCheck,
            AttendanceRange,
            AttendanceListResponse,
            HistoryResponse,
            StatsResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "History", description = "Undo/redo and store statistics"),
    )
)]
pub struct ApiDoc;
