use std::net::SocketAddr;
use std::sync::RwLock;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use hrm_store::{Config, HrStore, routes};
use serde_json::{Value, json};
use tempfile::TempDir;

fn peer() -> SocketAddr {
    "127.0.0.1:12345".parse().unwrap()
}

fn config_in(dir: &TempDir) -> Config {
    Config {
        employees_file: dir.path().join("employees.txt"),
        leave_requests_file: dir.path().join("leave_requests.txt"),
        attendance_file: dir.path().join("attendance.txt"),
        ..Config::default()
    }
}

macro_rules! app {
    ($config:expr) => {{
        let config = $config;
        let store = web::Data::new(RwLock::new(HrStore::from_config(&config)));
        test::init_service(
            App::new()
                .app_data(store)
                .configure(|cfg| routes::configure(cfg, &config)),
        )
        .await
    }};
}

#[actix_web::test]
async fn employee_lifecycle_with_undo() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::post()
        .uri("/api/employee")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Ada",
            "department": "R&D",
            "position": "Engineer",
            "salary": 70000.0
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], 1001);

    let req = test::TestRequest::get()
        .uri("/api/employee/1001")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Ada");
    assert!(body.get("password").is_none());

    let saved = std::fs::read_to_string(dir.path().join("employees.txt")).unwrap();
    assert_eq!(saved.trim(), "1001|Ada|R&D|70000|Engineer|1001");

    let req = test::TestRequest::delete()
        .uri("/api/employee/1001")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/employee/1001")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/history/undo")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/employee")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], 1001);
}

#[actix_web::test]
async fn leave_flow_through_pending_queue() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::post()
        .uri("/api/employee")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Bob",
            "department": "Ops",
            "position": "Technician",
            "salary": 40000.0
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let leave = json!({
        "employee_id": 1001,
        "start_date": "2024-03-04",
        "end_date": "2024-03-08",
        "reason": "Trip"
    });
    let req = test::TestRequest::post()
        .uri("/api/leave")
        .peer_addr(peer())
        .set_json(&leave)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/leave")
        .peer_addr(peer())
        .set_json(&leave)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/leave/next")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["employee_name"], "Bob");

    let req = test::TestRequest::put()
        .uri("/api/leave/1001/2024-03-04/approve")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri("/api/leave/1001/2024-03-04/reject")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/leave/next")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/leave?status=approved")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);

    let saved = std::fs::read_to_string(dir.path().join("leave_requests.txt")).unwrap();
    assert_eq!(saved.trim(), "1001|Bob|2024-03-04|2024-03-08|Trip|1");
}

#[actix_web::test]
async fn leave_for_unknown_employee_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::post()
        .uri("/api/leave")
        .peer_addr(peer())
        .set_json(json!({
            "employee_id": 42,
            "start_date": "2024-03-04",
            "end_date": "2024-03-08",
            "reason": "Trip"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn check_in_twice_is_rejected() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::post()
        .uri("/api/employee")
        .peer_addr(peer())
        .set_json(json!({
            "name": "Cy",
            "department": "Ops",
            "position": "Clerk",
            "salary": 30000.0
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/attendance/check-in")
            .peer_addr(peer())
            .set_json(json!({ "employee_id": 1001 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }

    let req = test::TestRequest::get()
        .uri("/api/attendance/employee/1001")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 1);
    assert!(body["data"][0]["time_out"].is_null());
}

#[actix_web::test]
async fn inverted_attendance_range_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::get()
        .uri("/api/attendance?start=2024-01-05&end=2024-01-01")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn empty_history_and_stats() {
    let dir = TempDir::new().unwrap();
    let app = app!(config_in(&dir));

    let req = test::TestRequest::post()
        .uri("/api/history/redo")
        .peer_addr(peer())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/history")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["can_undo"], false);
    assert!(body["next_undo"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/stats")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["employees"], 0);
    assert_eq!(body["attendance_balanced"], true);
}
