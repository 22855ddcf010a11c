pub mod action;
pub mod attendance;
pub mod employee;
pub mod leave_request;

pub use action::Action;
pub use attendance::{AttendanceByDay, AttendanceKey, AttendanceRecord};
pub use employee::{Employee, EmployeeById};
pub use leave_request::{LeaveRequest, LeaveStatus};
