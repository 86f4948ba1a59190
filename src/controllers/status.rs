use actix_web::{web, HttpResponse, Responder};
use tracing::{error, info};

use super::TEXT_PLAIN;
use crate::services::forwarder;
use crate::state::AppState;

pub async fn get_status(data: web::Data<AppState>) -> impl Responder {
    info!("Request for status of {}", data.reporter.service_name());

    match forwarder::report_status(&data).await {
        Ok(text) => HttpResponse::Ok().content_type(TEXT_PLAIN).body(text),
        Err(e) => {
            error!("Error generating status: {}", e);
            HttpResponse::InternalServerError()
                .content_type(TEXT_PLAIN)
                .body("Error generating status")
        }
    }
}
