use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use tracing::{error, info, warn};

use super::TEXT_PLAIN;
use crate::services::log_relay;
use crate::state::AppState;

// Get the formatted history from storage
pub async fn get_log(data: web::Data<AppState>) -> impl Responder {
    info!("Request for stored log");

    match log_relay::formatted_log(&data.transport).await {
        Ok(text) => HttpResponse::Ok().content_type(TEXT_PLAIN).body(text),
        Err(e) => {
            error!("Failed to get logs from storage: {}", e);
            HttpResponse::InternalServerError()
                .content_type(TEXT_PLAIN)
                .body("Error retrieving logs")
        }
    }
}

// Clear the history held by storage
pub async fn delete_log(data: web::Data<AppState>) -> impl Responder {
    info!("Request to clear stored log");

    match log_relay::clear_log(&data.transport).await {
        Ok(()) => HttpResponse::Ok().content_type(TEXT_PLAIN).body("Logs cleared"),
        Err(e) => match e.upstream_status() {
            Some(status) => {
                warn!("Storage refused to clear logs: {}", e);
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                HttpResponse::build(status)
                    .content_type(TEXT_PLAIN)
                    .body("Failed to clear logs")
            }
            None => {
                error!("Failed to delete logs from storage: {}", e);
                HttpResponse::InternalServerError()
                    .content_type(TEXT_PLAIN)
                    .body("Error clearing logs")
            }
        },
    }
}
