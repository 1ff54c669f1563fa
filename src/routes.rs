use crate::{
    api::{announcement, attendance, dashboard, employee, leave, notification},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let read_limiter = Arc::new(build_limiter(config.rate_read_per_min));
    let mutation_limiter = Arc::new(build_limiter(config.rate_mutation_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(read_limiter.clone())
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(web::resource("").route(web::get().to(attendance::list_attendance)))
                    // /attendance/clock-in
                    .service(
                        web::resource("/clock-in")
                            .wrap(mutation_limiter.clone())
                            .route(web::post().to(attendance::clock_in)),
                    )
                    // /attendance/clock-out
                    .service(
                        web::resource("/clock-out")
                            .wrap(mutation_limiter.clone())
                            .route(web::post().to(attendance::clock_out)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::leave_list))
                            .route(web::post().to(leave::create_leave)),
                    )
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::get().to(leave::get_leave)))
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve").route(web::put().to(leave::approve_leave)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject").route(web::put().to(leave::reject_leave)),
                    ),
            )
            .service(
                web::scope("/notifications")
                    .service(
                        web::resource("").route(web::get().to(notification::list_notifications)),
                    )
                    .service(
                        web::resource("/{id}/read").route(web::put().to(notification::mark_read)),
                    ),
            )
            .service(
                web::scope("/announcements")
                    .service(
                        web::resource("")
                            .route(web::get().to(announcement::list_announcements))
                            .route(web::post().to(announcement::create_announcement)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::delete().to(announcement::delete_announcement)),
                    ),
            )
            .service(
                web::scope("/employees")
                    .service(
                        web::resource("")
                            .route(web::post().to(employee::create_employee))
                            .route(web::get().to(employee::list_employees)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/dashboard")
                    .service(web::resource("/stats").route(web::get().to(dashboard::dashboard_stats)))
                    .service(
                        web::resource("/employee/{id}")
                            .route(web::get().to(dashboard::employee_dashboard)),
                    ),
            ),
    );
}
