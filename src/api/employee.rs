use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use super::{SharedStore, persisted, read_store, write_store};
use crate::model::Employee;
use crate::store::Recording;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "John Doe", value_type = String)]
    pub name: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
    #[schema(example = "Developer", value_type = String)]
    pub position: String,
    #[schema(example = 55000.0)]
    pub salary: f64,
    /// Defaults to the assigned id
    #[schema(example = "changeme", nullable = true)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    /// Exact department match
    pub department: Option<String>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 10)]
    pub total: usize,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub password: Option<String>,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee created successfully",
            "id": 1001
        })),
        (status = 400, description = "Invalid payload", body = Object, example = json!({
            "message": "Name is required"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: SharedStore,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    if payload.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Name is required"
        })));
    }

    let mut store = write_store(&store)?;
    let id = store.next_employee_id();
    let mut employee = Employee::new(
        id,
        payload.name.trim(),
        payload.department.trim(),
        payload.salary,
        payload.position.trim(),
    );
    if let Some(password) = payload.password.filter(|p| !p.is_empty()) {
        employee = employee.with_password(password);
    }

    store.add_employee(employee, Recording::Tracked);
    persisted(store.save_employees(), "employees")?;
    debug!(employee_id = id, "Employee created");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee created successfully",
        "id": id
    })))
}

#[utoipa::path(
    get,
    path = "/api/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Employees in insertion order", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: SharedStore,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;
    let search = query.search.as_deref().map(str::to_lowercase);

    let data: Vec<Employee> = store
        .employees()
        .filter(|e| query.department.as_deref().is_none_or(|d| e.department == d))
        .filter(|e| {
            search
                .as_deref()
                .is_none_or(|s| e.name.to_lowercase().contains(s))
        })
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        total: data.len(),
        data,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: SharedStore,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let store = read_store(&store)?;

    match store.find_employee(employee_id) {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Ok(not_found()),
    }
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Object, example = json!({
            "message": "Employee updated successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: SharedStore,
    path: web::Path<u64>,
    body: web::Json<UpdateEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let body = body.into_inner();
    let mut store = write_store(&store)?;

    let Some(mut employee) = store.find_employee(employee_id).cloned() else {
        return Ok(not_found());
    };
    if let Some(name) = body.name {
        employee.name = name;
    }
    if let Some(department) = body.department {
        employee.department = department;
    }
    if let Some(position) = body.position {
        employee.position = position;
    }
    if let Some(salary) = body.salary {
        employee.salary = salary;
    }
    if let Some(password) = body.password {
        employee.password = password;
    }

    store.update_employee(employee_id, employee, Recording::Tracked);
    persisted(store.save_employees(), "employees")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully"
    })))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: SharedStore,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let mut store = write_store(&store)?;

    if !store.delete_employee(employee_id, Recording::Tracked) {
        return Ok(not_found());
    }
    persisted(store.save_employees(), "employees")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": "Employee not found"
    }))
}
