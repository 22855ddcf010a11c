use chrono::NaiveDate;
use tracing::debug;

use super::{HrStore, Recording};
use crate::model::{Action, LeaveRequest, LeaveStatus};

impl HrStore {
    /// Files `request`; pending requests also join the back of the queue.
    /// Submissions are not journaled.
    pub fn submit_leave_request(&mut self, request: LeaveRequest) {
        if request.is_pending() {
            self.pending_leave.enqueue(request.clone());
        }
        self.leave_requests.push_back(request);
    }

    /// Oldest pending request, as stored in the full list.
    pub fn next_pending_request(&self) -> Option<&LeaveRequest> {
        let head = self.pending_leave.peek()?;
        self.leave_requests
            .find_first(|r| r.is_for(head.employee_id, head.start_date) && r.is_pending())
    }

    pub fn find_leave_request(&self, employee_id: u64, start_date: NaiveDate) -> Option<&LeaveRequest> {
        self.leave_requests
            .find_first(|r| r.is_for(employee_id, start_date))
    }

    /// Moves the request filed by `employee_id` for `start_date` to
    /// `status`, keeping the pending queue in step.
    pub fn process_leave_request(
        &mut self,
        employee_id: u64,
        start_date: NaiveDate,
        status: LeaveStatus,
        recording: Recording,
    ) -> bool {
        let Some(request) = self
            .leave_requests
            .find_first_mut(|r| r.is_for(employee_id, start_date))
        else {
            return false;
        };

        let previous = request.status;
        request.status = status;
        let updated = request.clone();

        let was_pending = previous == LeaveStatus::Pending;
        let now_pending = status == LeaveStatus::Pending;
        if was_pending && !now_pending {
            self.pending_leave
                .remove_first(|r| r.is_for(employee_id, start_date));
        } else if !was_pending && now_pending {
            self.pending_leave.enqueue(updated.clone());
        }
        debug!(employee_id, %start_date, from = %previous, to = %status, "Leave request processed");

        if recording.is_tracked() {
            if let Some(action) = Action::for_decision(updated, previous) {
                self.record(action);
            }
        }
        true
    }

    pub fn all_leave_requests(&self) -> Vec<LeaveRequest> {
        self.leave_requests.to_vec()
    }

    /// Pending requests, oldest first.
    pub fn pending_requests(&self) -> Vec<LeaveRequest> {
        self.pending_leave.to_vec()
    }

    pub fn employee_leave_requests(&self, employee_id: u64) -> Vec<LeaveRequest> {
        self.leave_requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn leave_request_count(&self) -> usize {
        self.leave_requests.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_leave.len()
    }

    pub(super) fn clear_leave_requests(&mut self) {
        self.leave_requests.clear();
        self.pending_leave.clear();
    }
}
