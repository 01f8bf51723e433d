//! HTTP server wiring.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dialogue_engine::DialogueEngine;
use gemini_client::{GeminiAsk, GeminiClient};
use healthbot_core::config::{Config, SESSION_TIMEOUT};
use session_store::SessionStore;

use crate::controllers::webhook_controller;

pub struct AppState {
    pub engine: DialogueEngine,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(webhook_controller::config);
}

/// Build the engine from configuration and serve the webhook endpoints.
pub async fn run(config: Config) -> std::io::Result<()> {
    let store = Arc::new(SessionStore::new(SESSION_TIMEOUT));
    let gemini: Arc<dyn GeminiAsk> = Arc::new(
        GeminiClient::new(config.gemini_api_key.clone()).with_model(config.model.clone()),
    );
    let engine = DialogueEngine::new(store, gemini);
    let app_state = web::Data::new(AppState { engine });

    tracing::info!(port = config.port, model = %config.model, "starting web service");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(app_config)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
