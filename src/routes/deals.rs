use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    DealMatch, ErrorResponse, SearchRequest, SearchResponse, ServiceStatus, ServiceStatuses,
    StatusResponse,
};
use crate::routes::AppState;

/// Configure deal search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/deals/search", web::post().to(search_deals));
}

/// Status endpoint
///
/// GET /api/status
pub async fn status(state: web::Data<AppState>) -> impl Responder {
    let now = chrono::Utc::now();

    let catalog = if state.catalog.is_empty() {
        ServiceStatus::Degraded
    } else {
        ServiceStatus::Operational
    };
    let webhook = if state.whatsapp.is_configured() && state.verify_token.is_some() {
        ServiceStatus::Operational
    } else {
        ServiceStatus::Degraded
    };
    let overall = if catalog == ServiceStatus::Operational && webhook == ServiceStatus::Operational {
        ServiceStatus::Operational
    } else {
        ServiceStatus::Degraded
    };

    HttpResponse::Ok().json(StatusResponse {
        status: overall,
        uptime: format_uptime(now - state.started_at),
        timestamp: now,
        services: ServiceStatuses {
            api: ServiceStatus::Operational,
            catalog,
            webhook,
        },
        catalog_size: state.catalog.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Format an uptime as "<hours>h <minutes>m"
pub fn format_uptime(uptime: chrono::Duration) -> String {
    let minutes = uptime.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Search endpoint
///
/// POST /api/v1/deals/search
///
/// Request body:
/// ```json
/// { "query": "string" }
/// ```
async fn search_deals(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let result = state.matcher.find_matches(&req.query, state.catalog.deals());

    tracing::info!(
        "Search returned {} deals for {} terms",
        result.matches.len(),
        result.terms.len()
    );

    let matches: Vec<DealMatch> = result.matches.into_iter().map(DealMatch::from).collect();

    HttpResponse::Ok().json(SearchResponse {
        terms: result.terms,
        total_results: matches.len(),
        matches,
    })
}
