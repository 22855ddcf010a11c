use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::collections::KeyExtractor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1001)]
    pub employee_id: u64,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "09:00:00", value_type = String)]
    pub time_in: NaiveTime,
    #[schema(example = "17:30:00", value_type = Option<String>, nullable = true)]
    pub time_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn new(
        employee_id: u64,
        employee_name: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveTime,
    ) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            date,
            time_in,
            time_out: None,
        }
    }

    pub fn with_time_out(mut self, time_out: NaiveTime) -> Self {
        self.time_out = Some(time_out);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.time_out.is_some()
    }

    pub fn key(&self) -> AttendanceKey {
        AttendanceKey::new(self.date, self.employee_id)
    }
}

/// Composite index key: one record per employee per day.
///
/// Orders by date first, then employee id; displays as `yyyy-mm-dd_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttendanceKey {
    pub date: NaiveDate,
    pub employee_id: u64,
}

impl AttendanceKey {
    pub fn new(date: NaiveDate, employee_id: u64) -> Self {
        Self { date, employee_id }
    }

    /// Lowest key on `date`, below every employee.
    pub fn first_of_day(date: NaiveDate) -> Self {
        Self::new(date, u64::MIN)
    }

    /// Highest key on `date`, above every employee.
    pub fn last_of_day(date: NaiveDate) -> Self {
        Self::new(date, u64::MAX)
    }
}

impl fmt::Display for AttendanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.date.format("%Y-%m-%d"), self.employee_id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceByDay;

impl KeyExtractor<AttendanceRecord> for AttendanceByDay {
    type Key = AttendanceKey;

    fn extract(&self, value: &AttendanceRecord) -> AttendanceKey {
        value.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn key_orders_by_date_then_employee() {
        assert!(AttendanceKey::new(day(1), 9999) < AttendanceKey::new(day(2), 1));
        assert!(AttendanceKey::new(day(2), 999) < AttendanceKey::new(day(2), 1000));
        assert!(AttendanceKey::first_of_day(day(2)) < AttendanceKey::new(day(2), 1));
        assert!(AttendanceKey::last_of_day(day(2)) > AttendanceKey::new(day(2), 9_999_999));
    }

    #[test]
    fn key_display_format() {
        assert_eq!(AttendanceKey::new(day(5), 1001).to_string(), "2024-01-05_1001");
    }
}
