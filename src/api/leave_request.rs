use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use super::{SharedStore, persisted, read_store, write_store};
use crate::model::{LeaveRequest, LeaveStatus};
use crate::store::Recording;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = 1001)]
    pub employee_id: u64,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Family event")]
    pub reason: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    #[schema(example = 1001)]
    /// Filter by employee ID
    pub employee_id: Option<u64>,
    #[schema(example = "pending")]
    /// Filter by leave status
    pub status: Option<LeaveStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveRequest>,
    #[schema(example = 1)]
    pub total: usize,
}

/* =========================
Submit leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted successfully",
         body = Object,
         example = json!({
            "message": "Leave request submitted",
            "status": "pending"
         })
        ),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: SharedStore,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();

    if payload.start_date > payload.end_date {
        return Ok(bad_request("start_date cannot be after end_date"));
    }
    if payload.reason.trim().is_empty() {
        return Ok(bad_request("A reason is required"));
    }

    let mut store = write_store(&store)?;
    let Some(employee) = store.find_employee(payload.employee_id) else {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })));
    };
    // requests are addressed by (employee, start date), so that pair must stay unique
    if store
        .find_leave_request(payload.employee_id, payload.start_date)
        .is_some()
    {
        return Ok(bad_request("A leave request already starts on that date"));
    }

    let request = LeaveRequest::new(
        employee.id,
        employee.name.clone(),
        payload.start_date,
        payload.end_date,
        payload.reason.trim(),
    );
    store.submit_leave_request(request);
    persisted(store.save_leave_requests(), "leave requests")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave request submitted",
        "status": "pending"
    })))
}

#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Leave requests in submission order", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: SharedStore,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;

    let requests = match query.employee_id {
        Some(employee_id) => store.employee_leave_requests(employee_id),
        None => store.all_leave_requests(),
    };
    let data: Vec<LeaveRequest> = requests
        .into_iter()
        .filter(|r| query.status.is_none_or(|s| r.status == s))
        .collect();

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/leave/pending",
    responses(
        (status = 200, description = "Pending requests, oldest first", body = LeaveListResponse)
    ),
    tag = "Leave"
)]
pub async fn pending_list(store: SharedStore) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;
    let data = store.pending_requests();

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/leave/next",
    responses(
        (status = 200, description = "Oldest pending request", body = LeaveRequest),
        (status = 404, description = "No pending requests", body = Object, example = json!({
            "message": "No pending leave requests"
        }))
    ),
    tag = "Leave"
)]
pub async fn next_pending(store: SharedStore) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;

    match store.next_pending_request() {
        Some(request) => Ok(HttpResponse::Ok().json(request)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "message": "No pending leave requests"
        }))),
    }
}

/* =========================
Approve leave
========================= */
#[utoipa::path(
    put,
    path = "/api/leave/{employee_id}/{start_date}/approve",
    params(
        ("employee_id" = u64, Path, description = "Employee who filed the request"),
        ("start_date" = String, Path, description = "Start date of the request (yyyy-mm-dd)")
    ),
    responses(
        (status = 200, description = "Leave approved successfully", body = Object, example = json!({
            "message": "Leave approved"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    store: SharedStore,
    path: web::Path<(u64, NaiveDate)>,
) -> actix_web::Result<impl Responder> {
    decide(store, path.into_inner(), LeaveStatus::Approved, "Leave approved")
}

/* =========================
Reject leave
========================= */
#[utoipa::path(
    put,
    path = "/api/leave/{employee_id}/{start_date}/reject",
    params(
        ("employee_id" = u64, Path, description = "Employee who filed the request"),
        ("start_date" = String, Path, description = "Start date of the request (yyyy-mm-dd)")
    ),
    responses(
        (status = 200, description = "Leave rejected successfully", body = Object, example = json!({
            "message": "Leave rejected"
        })),
        (status = 400, description = "Leave request not found or already processed", body = Object, example = json!({
            "message": "Leave request not found or already processed"
        }))
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    store: SharedStore,
    path: web::Path<(u64, NaiveDate)>,
) -> actix_web::Result<impl Responder> {
    decide(store, path.into_inner(), LeaveStatus::Rejected, "Leave rejected")
}

fn decide(
    store: SharedStore,
    (employee_id, start_date): (u64, NaiveDate),
    status: LeaveStatus,
    message: &str,
) -> actix_web::Result<HttpResponse> {
    let mut store = write_store(&store)?;

    let pending = store
        .find_leave_request(employee_id, start_date)
        .is_some_and(LeaveRequest::is_pending);
    if !pending {
        return Ok(bad_request("Leave request not found or already processed"));
    }

    store.process_leave_request(employee_id, start_date, status, Recording::Tracked);
    persisted(store.save_leave_requests(), "leave requests")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": message
    })))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "message": message
    }))
}
