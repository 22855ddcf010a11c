use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, FromRepr};
use utoipa::ToSchema;

/// Stored as its numeric code (0, 1, 2) in the leave file.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    Display,
    EnumString,
    FromRepr,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveStatus {
    #[default]
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl LeaveStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1001)]
    pub employee_id: u64,
    /// Name at the time the request was filed
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family event")]
    pub reason: String,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// A new request always starts out pending.
    pub fn new(
        employee_id: u64,
        employee_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            start_date,
            end_date,
            reason: reason.into(),
            status: LeaveStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Requests are addressed by employee and start date.
    pub fn is_for(&self, employee_id: u64, start_date: NaiveDate) -> bool {
        self.employee_id == employee_id && self.start_date == start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_codes_and_names() {
        assert_eq!(LeaveStatus::from_repr(1), Some(LeaveStatus::Approved));
        assert_eq!(LeaveStatus::from_repr(3), None);
        assert_eq!(LeaveStatus::Rejected.code(), 2);
        assert_eq!(LeaveStatus::Pending.to_string(), "pending");
        assert_eq!(LeaveStatus::from_str("Approved"), Ok(LeaveStatus::Approved));
    }
}
