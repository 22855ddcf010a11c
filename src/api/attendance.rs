use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use super::{SharedStore, persisted, read_store, write_store};
use crate::model::AttendanceRecord;

#[derive(Deserialize, ToSchema)]
pub struct AttendanceCheck {
    #[schema(example = 1001)]
    pub employee_id: u64,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceRange {
    /// First day, inclusive
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    #[param(value_type = String)]
    pub start: NaiveDate,
    /// Last day, inclusive
    #[schema(example = "2026-01-31", format = "date", value_type = String)]
    #[param(value_type = String)]
    pub end: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceRecord>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/check-in",
    request_body = AttendanceCheck,
    responses(
        (status = 200, description = "Checked in successfully", body = Object, example = json!({
            "message": "Checked in successfully"
        })),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    store: SharedStore,
    payload: web::Json<AttendanceCheck>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;
    let mut store = write_store(&store)?;

    if store.find_employee(employee_id).is_none() {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })));
    }
    if !store.mark_attendance(employee_id, Local::now().naive_local()) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Already checked in today"
        })));
    }
    persisted(store.save_attendance_records(), "attendance")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Checked in successfully"
    })))
}

/// Check-out endpoint
#[utoipa::path(
    put,
    path = "/api/attendance/check-out",
    request_body = AttendanceCheck,
    responses(
        (status = 200, description = "Checked out successfully", body = Object, example = json!({
            "message": "Checked out successfully"
        })),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "No active check-in found for today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    store: SharedStore,
    payload: web::Json<AttendanceCheck>,
) -> actix_web::Result<impl Responder> {
    let employee_id = payload.employee_id;
    let now = Local::now().naive_local();
    let mut store = write_store(&store)?;

    if !store.record_check_out(employee_id, now.date(), now.time()) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "No active check-in found for today"
        })));
    }
    persisted(store.save_attendance_records(), "attendance")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Checked out successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceRange),
    responses(
        (status = 200, description = "Records in the date window, ordered by date then employee", body = AttendanceListResponse),
        (status = 400, description = "start is after end")
    ),
    tag = "Attendance"
)]
pub async fn attendance_range(
    store: SharedStore,
    query: web::Query<AttendanceRange>,
) -> actix_web::Result<impl Responder> {
    if query.start > query.end {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "start cannot be after end"
        })));
    }
    let store = read_store(&store)?;
    let data = store.attendance_by_date_range(query.start, query.end);

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee's records by date", body = AttendanceListResponse)
    ),
    tag = "Attendance"
)]
pub async fn employee_attendance(
    store: SharedStore,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;
    let data = store.employee_attendance(path.into_inner());

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        total: data.len(),
        data,
    }))
}
