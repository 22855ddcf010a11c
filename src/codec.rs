//! One-record-per-line flat file encoding.
//!
//! Fields are joined by [`DELIMITER`] with no escaping, so a delimiter
//! inside a text field corrupts the line.

use chrono::{NaiveDate, NaiveTime};
use derive_more::Display;

use crate::model::{AttendanceRecord, Employee, LeaveRequest, LeaveStatus};

pub const DELIMITER: char = '|';
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CodecError {
    #[display(fmt = "expected at least {} fields, found {}", expected, found)]
    MissingFields { expected: usize, found: usize },
    #[display(fmt = "invalid number in `{}`: {:?}", field, value)]
    InvalidNumber { field: &'static str, value: String },
    #[display(fmt = "invalid date in `{}`: {:?}", field, value)]
    InvalidDate { field: &'static str, value: String },
    #[display(fmt = "invalid time in `{}`: {:?}", field, value)]
    InvalidTime { field: &'static str, value: String },
    #[display(fmt = "unknown leave status code {:?}", _0)]
    InvalidStatus(String),
    #[display(fmt = "employee id must be positive, got {}", _0)]
    NonPositiveId(i64),
}

impl std::error::Error for CodecError {}

/// A record that converts to and from one delimited text line.
pub trait LineCodec: Sized {
    fn to_line(&self) -> String;

    fn from_line(line: &str) -> Result<Self, CodecError>;
}

impl LineCodec for Employee {
    /// `id|name|department|salary|position|password`
    fn to_line(&self) -> String {
        join(&[
            &self.id.to_string(),
            &self.name,
            &self.department,
            &self.salary.to_string(),
            &self.position,
            &self.password,
        ])
    }

    fn from_line(line: &str) -> Result<Self, CodecError> {
        let fields = split(line, 5)?;
        let id = parse_id(fields[0])?;
        let salary = fields[3]
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_number("salary", fields[3]))?;

        let employee = Employee::new(id, fields[1], fields[2], salary, fields[4]);
        Ok(match fields.get(5) {
            Some(password) => employee.with_password(*password),
            None => employee,
        })
    }
}

impl LineCodec for LeaveRequest {
    /// `employeeId|employeeName|startDate|endDate|reason|statusCode`
    fn to_line(&self) -> String {
        join(&[
            &self.employee_id.to_string(),
            &self.employee_name,
            &self.start_date.format(DATE_FORMAT).to_string(),
            &self.end_date.format(DATE_FORMAT).to_string(),
            &self.reason,
            &self.status.code().to_string(),
        ])
    }

    fn from_line(line: &str) -> Result<Self, CodecError> {
        let fields = split(line, 6)?;
        let status = fields[5]
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(LeaveStatus::from_repr)
            .ok_or_else(|| CodecError::InvalidStatus(fields[5].to_string()))?;

        Ok(LeaveRequest {
            employee_id: parse_id(fields[0])?,
            employee_name: fields[1].to_string(),
            start_date: parse_date("start_date", fields[2])?,
            end_date: parse_date("end_date", fields[3])?,
            reason: fields[4].to_string(),
            status,
        })
    }
}

impl LineCodec for AttendanceRecord {
    /// `employeeId|employeeName|date|timeIn|timeOut`, time-out empty while
    /// the employee is still checked in.
    fn to_line(&self) -> String {
        let time_out = self
            .time_out
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default();
        join(&[
            &self.employee_id.to_string(),
            &self.employee_name,
            &self.date.format(DATE_FORMAT).to_string(),
            &self.time_in.format(TIME_FORMAT).to_string(),
            &time_out,
        ])
    }

    fn from_line(line: &str) -> Result<Self, CodecError> {
        let fields = split(line, 4)?;
        let time_out = match fields.get(4).map(|f| f.trim()) {
            Some(raw) if !raw.is_empty() => Some(parse_time("time_out", raw)?),
            _ => None,
        };

        Ok(AttendanceRecord {
            employee_id: parse_id(fields[0])?,
            employee_name: fields[1].to_string(),
            date: parse_date("date", fields[2])?,
            time_in: parse_time("time_in", fields[3])?,
            time_out,
        })
    }
}

fn join(fields: &[&str]) -> String {
    fields.join(&DELIMITER.to_string())
}

fn split(line: &str, required: usize) -> Result<Vec<&str>, CodecError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < required {
        return Err(CodecError::MissingFields {
            expected: required,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_id(raw: &str) -> Result<u64, CodecError> {
    let id = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_number("employee_id", raw))?;
    if id <= 0 {
        return Err(CodecError::NonPositiveId(id));
    }
    Ok(id as u64)
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, CodecError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| CodecError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

fn parse_time(field: &'static str, raw: &str) -> Result<NaiveTime, CodecError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| CodecError::InvalidTime {
        field,
        value: raw.to_string(),
    })
}

fn invalid_number(field: &'static str, raw: &str) -> CodecError {
    CodecError::InvalidNumber {
        field,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn employee_line_layout() {
        let employee = Employee::new(1001, "Ada", "R&D", 72500.5, "Engineer").with_password("s3cret");
        assert_eq!(employee.to_line(), "1001|Ada|R&D|72500.5|Engineer|s3cret");
        assert_eq!(Employee::from_line(&employee.to_line()), Ok(employee));
    }

    #[test]
    fn employee_password_defaults_to_id() {
        let employee = Employee::from_line("1002|Bob|Ops|40000|Technician").unwrap();
        assert_eq!(employee.password, "1002");
        assert_eq!(employee.salary, 40000.0);
    }

    #[test]
    fn employee_rejects_bad_lines() {
        assert_eq!(
            Employee::from_line("1|a|b"),
            Err(CodecError::MissingFields { expected: 5, found: 3 })
        );
        assert_eq!(
            Employee::from_line("0|a|b|1|c"),
            Err(CodecError::NonPositiveId(0))
        );
        assert_eq!(
            Employee::from_line("-4|a|b|1|c"),
            Err(CodecError::NonPositiveId(-4))
        );
        assert!(matches!(
            Employee::from_line("x|a|b|1|c"),
            Err(CodecError::InvalidNumber { field: "employee_id", .. })
        ));
        assert!(matches!(
            Employee::from_line("7|a|b|lots|c"),
            Err(CodecError::InvalidNumber { field: "salary", .. })
        ));
    }

    #[test]
    fn leave_request_round_trip() {
        let mut request = LeaveRequest::new(1001, "Ada", date(2024, 3, 4), date(2024, 3, 8), "Trip");
        request.status = LeaveStatus::Rejected;
        assert_eq!(request.to_line(), "1001|Ada|2024-03-04|2024-03-08|Trip|2");
        assert_eq!(LeaveRequest::from_line(&request.to_line()), Ok(request));
    }

    #[test]
    fn leave_request_rejects_unknown_status() {
        assert_eq!(
            LeaveRequest::from_line("1|a|2024-01-01|2024-01-02|r|7"),
            Err(CodecError::InvalidStatus("7".into()))
        );
        assert!(matches!(
            LeaveRequest::from_line("1|a|2024-13-01|2024-01-02|r|0"),
            Err(CodecError::InvalidDate { field: "start_date", .. })
        ));
    }

    #[test]
    fn attendance_round_trip_with_and_without_time_out() {
        let open = AttendanceRecord::new(1001, "Ada", date(2024, 1, 2), time(9, 5));
        assert_eq!(open.to_line(), "1001|Ada|2024-01-02|09:05|");
        assert_eq!(AttendanceRecord::from_line(&open.to_line()), Ok(open.clone()));

        let closed = open.with_time_out(time(17, 45));
        assert_eq!(closed.to_line(), "1001|Ada|2024-01-02|09:05|17:45");
        assert_eq!(AttendanceRecord::from_line(&closed.to_line()), Ok(closed));
    }

    #[test]
    fn attendance_time_out_field_is_optional() {
        let record = AttendanceRecord::from_line("5|Eve|2024-02-01|08:30").unwrap();
        assert!(!record.is_complete());
        assert!(matches!(
            AttendanceRecord::from_line("5|Eve|2024-02-01|8h"),
            Err(CodecError::InvalidTime { field: "time_in", .. })
        ));
    }
}
