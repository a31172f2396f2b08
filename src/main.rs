use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use deal_quest::config::Settings;
use deal_quest::core::Matcher;
use deal_quest::models::ErrorResponse;
use deal_quest::replies::ReplyComposer;
use deal_quest::routes::{self, AppState};
use deal_quest::services::{Catalog, WhatsAppClient};
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for payload errors
#[derive(Debug)]
struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(&self.0)
    }
}

/// Handle JSON payload errors
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    })
    .into()
}

/// Handle query payload errors
fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError(ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    })
    .into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Deal Quest...");
    info!("Configuration loaded successfully");

    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    if catalog.is_empty() {
        warn!("Catalog is empty, every search will come back without results");
    }

    let whatsapp = WhatsAppClient::new(
        settings.whatsapp.api_base.clone(),
        settings.whatsapp.token.clone(),
        settings.whatsapp.phone_id.clone(),
    );

    if !whatsapp.is_configured() {
        warn!("WhatsApp token or phone id missing, replies will not be delivered");
    }
    if settings.whatsapp.verify_token.is_none() {
        warn!("Webhook verify token missing, webhook verification will be refused");
    }
    if let Some(number) = &settings.whatsapp.number {
        info!("Bot number: {}", number);
    }

    let thresholds = settings.thresholds();
    let matcher = Matcher::new(thresholds);

    info!("Matcher initialized with thresholds: {:?}", thresholds);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher,
        whatsapp: Arc::new(whatsapp),
        replies: Arc::new(ReplyComposer::random()),
        verify_token: settings.whatsapp.verify_token.clone(),
        started_at: chrono::Utc::now(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
