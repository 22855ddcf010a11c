use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

use crate::{
    api::{attendance, employee, history, leave_request},
    config::Config,
};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = (60_000 / requests_per_min as u64).max(1);
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap_or_default();
        Governor::new(&cfg)
    }

    let limiter = build_limiter(config.rate_protected_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiter) // rate limiting
            .service(
                web::scope("/employee")
                    // /employee
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    // /employee/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(employee::update_employee))
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave_request::leave_list))
                            .route(web::post().to(leave_request::create_leave)),
                    )
                    .service(
                        web::resource("/pending").route(web::get().to(leave_request::pending_list)),
                    )
                    .service(web::resource("/next").route(web::get().to(leave_request::next_pending)))
                    // /leave/{employee_id}/{start_date}/approve
                    .service(
                        web::resource("/{employee_id}/{start_date}/approve")
                            .route(web::put().to(leave_request::approve_leave)),
                    )
                    // /leave/{employee_id}/{start_date}/reject
                    .service(
                        web::resource("/{employee_id}/{start_date}/reject")
                            .route(web::put().to(leave_request::reject_leave)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance?start=..&end=..
                    .service(web::resource("").route(web::get().to(attendance::attendance_range)))
                    .service(
                        web::resource("/check-in").route(web::post().to(attendance::check_in)),
                    )
                    .service(
                        web::resource("/check-out").route(web::put().to(attendance::check_out)),
                    )
                    .service(
                        web::resource("/employee/{id}")
                            .route(web::get().to(attendance::employee_attendance)),
                    ),
            )
            .service(
                web::scope("/history")
                    .service(web::resource("").route(web::get().to(history::history_state)))
                    .service(web::resource("/undo").route(web::post().to(history::undo)))
                    .service(web::resource("/redo").route(web::post().to(history::redo))),
            )
            .service(web::resource("/stats").route(web::get().to(history::stats))),
    );
}
