//! The multi-index HR store.
//!
//! [`HrStore`] owns every container and keeps the parallel indices of each
//! record kind in step:
//!
//! | record     | insertion order        | lookup                         |
//! |------------|------------------------|--------------------------------|
//! | employee   | [`OrderedList`]        | [`SearchTree`] by id           |
//! | leave      | [`OrderedList`]        | [`FifoQueue`] of pending ones  |
//! | attendance | in-order tree walk     | [`AvlTree`] by (date, id)      |
//!
//! Employee mutations and leave decisions are journaled on a bounded undo
//! stack; see [`HrStore::undo`] and [`HrStore::redo`].

mod attendance;
mod employees;
mod history;
mod leave;
mod persistence;

use std::path::{Path, PathBuf};

use crate::collections::{AvlTree, BoundedStack, FifoQueue, OrderedList, SearchTree};
use crate::config::Config;
use crate::model::{Action, AttendanceByDay, AttendanceRecord, Employee, EmployeeById, LeaveRequest};

/// Whether a mutation is pushed onto the undo stack.
///
/// Undo and redo apply their effects `Untracked` so replaying history never
/// journals itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recording {
    #[default]
    Tracked,
    Untracked,
}

impl Recording {
    fn is_tracked(self) -> bool {
        self == Recording::Tracked
    }
}

/// Locations of the three flat files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub employees: PathBuf,
    pub leave_requests: PathBuf,
    pub attendance: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DataFiles {
    pub fn from_config(config: &Config) -> Self {
        Self {
            employees: config.employees_file.clone(),
            leave_requests: config.leave_requests_file.clone(),
            attendance: config.attendance_file.clone(),
        }
    }

    /// The default file names placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            employees: dir.join("employees.txt"),
            leave_requests: dir.join("leave_requests.txt"),
            attendance: dir.join("attendance.txt"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HrStore {
    employees: OrderedList<Employee>,
    employee_index: SearchTree<Employee, EmployeeById>,

    leave_requests: OrderedList<LeaveRequest>,
    pending_leave: FifoQueue<LeaveRequest>,

    attendance: AvlTree<AttendanceRecord, AttendanceByDay>,

    undo_stack: BoundedStack<Action>,
    redo_stack: BoundedStack<Action>,

    files: DataFiles,
}

impl Default for HrStore {
    fn default() -> Self {
        Self::new(DataFiles::default(), crate::collections::stack::DEFAULT_CAPACITY)
    }
}

impl HrStore {
    pub fn new(files: DataFiles, history_capacity: usize) -> Self {
        Self {
            employees: OrderedList::new(),
            employee_index: SearchTree::new(EmployeeById),
            leave_requests: OrderedList::new(),
            pending_leave: FifoQueue::new(),
            attendance: AvlTree::new(AttendanceByDay),
            undo_stack: BoundedStack::new(history_capacity),
            redo_stack: BoundedStack::new(history_capacity),
            files,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(DataFiles::from_config(config), config.history_capacity)
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }
}
