use actix_web::{web, HttpResponse, Responder};
use crate::core::is_greeting;
use crate::models::{Deal, WebhookVerifyQuery, WhatsAppWebhook};
use crate::routes::AppState;

/// Configure the WhatsApp webhook
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/webhook")
            .route(web::get().to(verify))
            .route(web::post().to(receive))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Webhook verification
///
/// GET /api/webhook?hub.mode=subscribe&hub.verify_token=TOKEN&hub.challenge=CHALLENGE
///
/// Echoes the challenge when the mode is `subscribe` and the token matches
/// the configured verify token.
async fn verify(
    state: web::Data<AppState>,
    query: web::Query<WebhookVerifyQuery>,
) -> impl Responder {
    let subscribed = query.mode.as_deref() == Some("subscribe");
    let token_matches = match (&query.verify_token, &state.verify_token) {
        (Some(given), Some(expected)) => given == expected,
        _ => false,
    };

    if subscribed && token_matches {
        tracing::info!("Webhook verified successfully");
        return HttpResponse::Ok()
            .content_type("text/plain")
            .body(query.challenge.clone().unwrap_or_default());
    }

    tracing::info!("Webhook verification failed - token mismatch");
    HttpResponse::Forbidden().body("Forbidden")
}

/// Incoming message notifications
///
/// POST /api/webhook
///
/// Always answers 200 so WhatsApp does not redeliver; failures are logged.
async fn receive(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let payload: WhatsAppWebhook = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Webhook error: invalid payload: {}", e);
            return ok();
        }
    };

    let Some(message) = payload.first_message() else {
        return ok();
    };
    let Some(text) = message.text_body() else {
        tracing::debug!("Ignoring {} message from {}", message.kind, message.from);
        return ok();
    };

    let reply = compose_reply(&state, text);

    if let Err(e) = state.whatsapp.send_message(&message.from, &reply).await {
        tracing::error!("Webhook error: failed to reply to {}: {}", message.from, e);
    }

    ok()
}

/// Welcome text for greetings, otherwise the formatted search results
pub fn compose_reply(state: &AppState, text: &str) -> String {
    if is_greeting(text) {
        return state.replies.welcome().to_string();
    }

    let result = state.matcher.find_matches(text, state.catalog.deals());
    let deals: Vec<&Deal> = result.matches.iter().map(|scored| scored.deal).collect();
    tracing::info!("Found {} deals for incoming message", deals.len());

    state.replies.format_deals(&deals)
}

async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "error": "Method not allowed" }))
}

fn ok() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
