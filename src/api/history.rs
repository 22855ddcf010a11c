use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use super::{SharedStore, persisted, read_store, write_store};

#[derive(Serialize, ToSchema)]
pub struct HistoryResponse {
    pub can_undo: bool,
    pub can_redo: bool,
    #[schema(example = 3)]
    pub undo_depth: usize,
    #[schema(example = 0)]
    pub redo_depth: usize,
    /// Kind of the action `undo` would revert
    #[schema(example = "add_employee", nullable = true)]
    pub next_undo: Option<String>,
    #[schema(nullable = true)]
    pub next_redo: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub employees: usize,
    pub leave_requests: usize,
    pub pending_leave_requests: usize,
    pub attendance_records: usize,
    pub employee_tree_height: usize,
    pub attendance_tree_height: usize,
    pub attendance_balanced: bool,
}

#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Undo/redo state", body = HistoryResponse)
    ),
    tag = "History"
)]
pub async fn history_state(store: SharedStore) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;

    Ok(HttpResponse::Ok().json(HistoryResponse {
        can_undo: store.can_undo(),
        can_redo: store.can_redo(),
        undo_depth: store.undo_depth(),
        redo_depth: store.redo_depth(),
        next_undo: store.peek_undo().map(|a| a.kind().to_string()),
        next_redo: store.peek_redo().map(|a| a.kind().to_string()),
    }))
}

#[utoipa::path(
    post,
    path = "/api/history/undo",
    responses(
        (status = 200, description = "Last change reverted", body = Object, example = json!({
            "message": "Undo successful"
        })),
        (status = 400, description = "Nothing to undo")
    ),
    tag = "History"
)]
pub async fn undo(store: SharedStore) -> actix_web::Result<impl Responder> {
    let mut store = write_store(&store)?;

    if !store.undo() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Nothing to undo"
        })));
    }
    persisted(store.save_all(), "all")?;
    info!(undo_depth = store.undo_depth(), "Undo applied over HTTP");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Undo successful"
    })))
}

#[utoipa::path(
    post,
    path = "/api/history/redo",
    responses(
        (status = 200, description = "Last undone change re-applied", body = Object, example = json!({
            "message": "Redo successful"
        })),
        (status = 400, description = "Nothing to redo")
    ),
    tag = "History"
)]
pub async fn redo(store: SharedStore) -> actix_web::Result<impl Responder> {
    let mut store = write_store(&store)?;

    if !store.redo() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Nothing to redo"
        })));
    }
    persisted(store.save_all(), "all")?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Redo successful"
    })))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Index sizes and tree shape", body = StatsResponse)
    ),
    tag = "History"
)]
pub async fn stats(store: SharedStore) -> actix_web::Result<impl Responder> {
    let store = read_store(&store)?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        employees: store.employee_count(),
        leave_requests: store.leave_request_count(),
        pending_leave_requests: store.pending_count(),
        attendance_records: store.attendance_count(),
        employee_tree_height: store.employee_tree_height(),
        attendance_tree_height: store.attendance_tree_height(),
        attendance_balanced: store.is_attendance_balanced(),
    }))
}
