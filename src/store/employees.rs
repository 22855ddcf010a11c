use tracing::debug;

use super::{HrStore, Recording};
use crate::model::{Action, Employee};

/// Ids are handed out above this floor.
const EMPLOYEE_ID_BASE: u64 = 1000;

impl HrStore {
    /// Appends `employee` to the roster and indexes it by id.
    ///
    /// Returns false, changing nothing, if the id is already taken.
    pub fn add_employee(&mut self, employee: Employee, recording: Recording) -> bool {
        if self.employee_index.contains(&employee.id) {
            debug!(employee_id = employee.id, "Employee id already present");
            return false;
        }

        if recording.is_tracked() {
            self.record(Action::AddEmployee(employee.clone()));
        }
        self.insert_employee(employee);
        true
    }

    /// Replaces every field of employee `id` except the id itself.
    pub fn update_employee(&mut self, id: u64, mut employee: Employee, recording: Recording) -> bool {
        let Some(previous) = self.employee_index.search(&id).cloned() else {
            return false;
        };
        employee.id = id;

        self.employees.update_first(|e| e.id == id, employee.clone());
        self.employee_index.update(&id, employee.clone());

        if recording.is_tracked() {
            self.record(Action::EditEmployee {
                current: employee,
                previous,
            });
        }
        true
    }

    pub fn delete_employee(&mut self, id: u64, recording: Recording) -> bool {
        let Some(removed) = self.employee_index.remove(&id) else {
            return false;
        };
        self.employees.remove_first(|e| e.id == id);
        debug!(employee_id = id, "Employee removed");

        if recording.is_tracked() {
            self.record(Action::DeleteEmployee(removed));
        }
        true
    }

    pub fn find_employee(&self, id: u64) -> Option<&Employee> {
        self.employee_index.search(&id)
    }

    /// Roster in insertion order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn all_employees(&self) -> Vec<Employee> {
        self.employees.to_vec()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// One past the highest id in use, never below 1001.
    pub fn next_employee_id(&self) -> u64 {
        self.employee_index
            .max()
            .map_or(EMPLOYEE_ID_BASE, |e| e.id.max(EMPLOYEE_ID_BASE))
            + 1
    }

    pub fn employee_tree_height(&self) -> usize {
        self.employee_index.height()
    }

    pub(super) fn insert_employee(&mut self, employee: Employee) {
        self.employees.push_back(employee.clone());
        self.employee_index.insert(employee);
    }

    pub(super) fn clear_employees(&mut self) {
        self.employees.clear();
        self.employee_index.clear();
    }
}
