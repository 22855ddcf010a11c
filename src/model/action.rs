use strum_macros::AsRefStr;

use super::{Employee, LeaveRequest, LeaveStatus};

/// One reversible mutation, carrying the snapshots needed to apply it
/// again or to invert it.
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    AddEmployee(Employee),
    EditEmployee {
        current: Employee,
        previous: Employee,
    },
    DeleteEmployee(Employee),
    ApproveLeave {
        request: LeaveRequest,
        previous: LeaveStatus,
    },
    RejectLeave {
        request: LeaveRequest,
        previous: LeaveStatus,
    },
}

impl Action {
    /// Action recorded for a leave decision; moving back to pending is not
    /// a decision and has none.
    pub fn for_decision(request: LeaveRequest, previous: LeaveStatus) -> Option<Self> {
        match request.status {
            LeaveStatus::Approved => Some(Action::ApproveLeave { request, previous }),
            LeaveStatus::Rejected => Some(Action::RejectLeave { request, previous }),
            LeaveStatus::Pending => None,
        }
    }

    pub fn kind(&self) -> &str {
        self.as_ref()
    }
}
