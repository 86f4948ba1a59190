use actix_web::web;

pub mod health;
pub mod log;
pub mod status;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Register every route the relay serves
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status::get_status))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/log")
                .route(web::get().to(log::get_log))
                .route(web::delete().to(log::delete_log)),
        );
}
