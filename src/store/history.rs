use tracing::{debug, info, warn};

use super::{HrStore, Recording};
use crate::model::{Action, LeaveStatus};

impl HrStore {
    /// Journals a fresh mutation. Any redo history is discarded.
    pub(super) fn record(&mut self, action: Action) {
        if let Some(evicted) = self.undo_stack.push(action) {
            debug!(kind = evicted.kind(), "Oldest undo entry evicted");
        }
        self.redo_stack.clear();
    }

    /// Reverts the most recent journaled mutation and moves it onto the redo
    /// stack. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };

        if !self.apply_inverse(&action) {
            warn!(kind = action.kind(), "Undo target no longer matches the store");
        }
        info!(kind = action.kind(), "Undo");
        self.redo_stack.push(action);
        true
    }

    /// Re-applies the most recently undone mutation.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };

        if !self.apply_forward(&action) {
            warn!(kind = action.kind(), "Redo target no longer matches the store");
        }
        info!(kind = action.kind(), "Redo");
        self.undo_stack.push(action);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.peek().is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_stack.peek().is_some()
    }

    pub fn peek_undo(&self) -> Option<&Action> {
        self.undo_stack.peek()
    }

    pub fn peek_redo(&self) -> Option<&Action> {
        self.redo_stack.peek()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn apply_inverse(&mut self, action: &Action) -> bool {
        let untracked = Recording::Untracked;
        match action {
            Action::AddEmployee(employee) => self.delete_employee(employee.id, untracked),
            Action::EditEmployee { current, previous } => {
                self.update_employee(current.id, previous.clone(), untracked)
            }
            Action::DeleteEmployee(employee) => self.add_employee(employee.clone(), untracked),
            Action::ApproveLeave { request, previous } | Action::RejectLeave { request, previous } => {
                self.process_leave_request(request.employee_id, request.start_date, *previous, untracked)
            }
        }
    }

    fn apply_forward(&mut self, action: &Action) -> bool {
        let untracked = Recording::Untracked;
        match action {
            Action::AddEmployee(employee) => self.add_employee(employee.clone(), untracked),
            Action::EditEmployee { current, .. } => {
                self.update_employee(current.id, current.clone(), untracked)
            }
            Action::DeleteEmployee(employee) => self.delete_employee(employee.id, untracked),
            Action::ApproveLeave { request, .. } => self.process_leave_request(
                request.employee_id,
                request.start_date,
                LeaveStatus::Approved,
                untracked,
            ),
            Action::RejectLeave { request, .. } => self.process_leave_request(
                request.employee_id,
                request.start_date,
                LeaveStatus::Rejected,
                untracked,
            ),
        }
    }
}
