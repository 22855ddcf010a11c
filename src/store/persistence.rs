use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::HrStore;
use crate::codec::LineCodec;
use crate::model::{AttendanceRecord, Employee, LeaveRequest};

impl HrStore {
    pub fn load_all(&mut self) -> Result<()> {
        self.load_employees()?;
        self.load_leave_requests()?;
        self.load_attendance_records()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<()> {
        self.save_employees()?;
        self.save_leave_requests()?;
        self.save_attendance_records()?;
        Ok(())
    }

    /// Replaces the roster with the employee file. Returns how many
    /// employees were loaded.
    pub fn load_employees(&mut self) -> Result<usize> {
        self.clear_employees();
        let path = self.files.employees.clone();
        let mut loaded = 0;
        for employee in read_records::<Employee>(&path)? {
            // first line wins for a repeated id
            if self.employee_index.contains(&employee.id) {
                debug!(employee_id = employee.id, "Duplicate employee id skipped");
                continue;
            }
            self.insert_employee(employee);
            loaded += 1;
        }
        info!(path = %path.display(), loaded, "Employees loaded");
        Ok(loaded)
    }

    pub fn save_employees(&self) -> Result<usize> {
        write_records(&self.files.employees, self.employees.iter())
    }

    pub fn load_leave_requests(&mut self) -> Result<usize> {
        self.clear_leave_requests();
        let path = self.files.leave_requests.clone();
        let requests = read_records::<LeaveRequest>(&path)?;
        let loaded = requests.len();
        for request in requests {
            self.submit_leave_request(request);
        }
        info!(path = %path.display(), loaded, "Leave requests loaded");
        Ok(loaded)
    }

    pub fn save_leave_requests(&self) -> Result<usize> {
        write_records(&self.files.leave_requests, self.leave_requests.iter())
    }

    pub fn load_attendance_records(&mut self) -> Result<usize> {
        self.attendance.clear();
        let path = self.files.attendance.clone();
        for record in read_records::<AttendanceRecord>(&path)? {
            self.attendance.insert(record);
        }
        let loaded = self.attendance.len();
        info!(path = %path.display(), loaded, "Attendance records loaded");
        Ok(loaded)
    }

    /// Written in key order.
    pub fn save_attendance_records(&self) -> Result<usize> {
        write_records(&self.files.attendance, self.attendance.inorder())
    }
}

/// Decodes every well-formed line of `path`.
///
/// A file that cannot be opened reads as empty; lines that are not UTF-8
/// or fail to decode are skipped.
fn read_records<R: LineCodec>(path: &Path) -> Result<Vec<R>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                debug!(path = %path.display(), "Data file missing, starting empty");
            } else {
                warn!(path = %path.display(), error = %e, "Data file unavailable, starting empty");
            }
            return Ok(Vec::new());
        }
    };

    let mut records = Vec::new();
    for (number, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let raw = raw.with_context(|| format!("Failed to read {}", path.display()))?;
        let Ok(line) = std::str::from_utf8(&raw) else {
            debug!(path = %path.display(), line = number + 1, "Undecodable line skipped");
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match R::from_line(line) {
            Ok(record) => records.push(record),
            Err(e) => debug!(path = %path.display(), line = number + 1, error = %e, "Malformed record skipped"),
        }
    }
    Ok(records)
}

/// Overwrites `path` with one encoded line per record.
fn write_records<'a, R, I>(path: &Path, records: I) -> Result<usize>
where
    R: LineCodec + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let mut written = 0;
    for record in records {
        writeln!(out, "{}", record.to_line())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written += 1;
    }
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), written, "Records saved");
    Ok(written)
}
