// Route exports
pub mod deals;
pub mod webhook;

use actix_web::web;
use crate::core::Matcher;
use crate::replies::ReplyComposer;
use crate::services::{Catalog, WhatsAppClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub whatsapp: Arc<WhatsAppClient>,
    pub replies: Arc<ReplyComposer>,
    pub verify_token: Option<String>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(webhook::configure)
            .route("/status", web::get().to(deals::status))
            .service(web::scope("/v1").configure(deals::configure)),
    );
}
