//! Messaging-gateway webhook and liveness endpoints.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::server::AppState;
use crate::twiml::MessagingResponse;

/// Form payload of the messaging-gateway callback.
///
/// The gateway posts many more fields; only these two matter here.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: String,
}

async fn whatsapp_webhook(
    state: web::Data<AppState>,
    form: web::Form<IncomingMessage>,
) -> impl Responder {
    let IncomingMessage { body, from } = form.into_inner();
    tracing::info!(from = %from, "incoming WhatsApp message");

    let reply = state.engine.respond(&from, &body).await;

    HttpResponse::Ok()
        .content_type("application/xml")
        .body(MessagingResponse::new(reply).to_xml())
}

async fn index() -> impl Responder {
    HttpResponse::Ok().body("✅ WhatsApp Healthcare Bot is running.")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/whatsapp").route(web::post().to(whatsapp_webhook)))
        .service(web::resource("/").route(web::get().to(index)));
}
