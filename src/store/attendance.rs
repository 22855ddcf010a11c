use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use super::HrStore;
use crate::model::{AttendanceKey, AttendanceRecord};

impl HrStore {
    /// Indexes `record` by (date, employee). A second record for the same
    /// day replaces the first, which is returned.
    pub fn add_attendance_record(&mut self, record: AttendanceRecord) -> Option<AttendanceRecord> {
        let replaced = self.attendance.insert(record);
        if let Some(old) = &replaced {
            debug!(key = %old.key(), "Attendance record overwritten");
        }
        replaced
    }

    pub fn find_attendance_record(&self, employee_id: u64, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.search(&AttendanceKey::new(date, employee_id))
    }

    pub fn has_attendance_on(&self, employee_id: u64, date: NaiveDate) -> bool {
        self.attendance.contains(&AttendanceKey::new(date, employee_id))
    }

    pub fn has_attendance_today(&self, employee_id: u64) -> bool {
        self.has_attendance_on(employee_id, Local::now().date_naive())
    }

    /// Checks `employee_id` in at `at`, to the minute.
    ///
    /// Fails for unknown employees and for a second check-in on the same day.
    pub fn mark_attendance(&mut self, employee_id: u64, at: NaiveDateTime) -> bool {
        let Some(employee) = self.find_employee(employee_id) else {
            return false;
        };
        let date = at.date();
        if self.has_attendance_on(employee_id, date) {
            return false;
        }

        let record = AttendanceRecord::new(employee_id, employee.name.clone(), date, to_minute(at.time()));
        self.attendance.insert(record);
        true
    }

    /// Closes the open record of `employee_id` on `date`, to the minute.
    pub fn record_check_out(&mut self, employee_id: u64, date: NaiveDate, time_out: NaiveTime) -> bool {
        match self.attendance.search_mut(&AttendanceKey::new(date, employee_id)) {
            Some(record) if record.time_out.is_none() => {
                record.time_out = Some(to_minute(time_out));
                true
            }
            _ => false,
        }
    }

    /// Every record dated `start..=end`, across all employees, in key order.
    pub fn attendance_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<AttendanceRecord> {
        let mut result = Vec::new();
        self.attendance.range_search(
            &AttendanceKey::first_of_day(start),
            &AttendanceKey::last_of_day(end),
            |r| result.push(r.clone()),
        );
        result
    }

    pub fn employee_attendance(&self, employee_id: u64) -> Vec<AttendanceRecord> {
        self.attendance.find_all(|r| r.employee_id == employee_id)
    }

    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }

    pub fn attendance_tree_height(&self) -> usize {
        self.attendance.height()
    }

    pub fn is_attendance_balanced(&self) -> bool {
        self.attendance.is_balanced()
    }
}

/// Drops seconds and sub-seconds; the attendance file stores `HH:MM`.
fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}
