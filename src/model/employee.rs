use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::collections::KeyExtractor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1001,
        "name": "John Doe",
        "department": "Engineering",
        "position": "Developer",
        "salary": 55000.0
    })
)]
pub struct Employee {
    #[schema(example = 1001)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Developer")]
    pub position: String,

    #[schema(example = 55000.0)]
    pub salary: f64,

    /// Plain text, as stored in the employee file. Never serialized.
    #[serde(skip)]
    pub password: String,
}

impl Employee {
    /// New employee whose password defaults to the id's decimal text.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            position: position.into(),
            salary,
            password: id.to_string(),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

/// Orders employees by id in the lookup tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeById;

impl KeyExtractor<Employee> for EmployeeById {
    type Key = u64;

    fn extract(&self, value: &Employee) -> u64 {
        value.id
    }
}
