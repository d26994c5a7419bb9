use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::models::{MediaEvent, WebhookAck};
use crate::state::AppState;

/// Webhook endpoint for the media request manager.
///
/// Point Jellyseerr's webhook notification agent at this endpoint with its
/// JSON payload template carrying `media_type`, `tmdbid`,
/// `requestedBy_username` and the season/series fields. Non-JSON bodies are
/// rejected by the extractor before the pipeline runs.
#[utoipa::path(
    post,
    path = "/api/webhook/jellyseerr",
    tag = "webhook",
    request_body = MediaEvent,
    responses(
        (status = 200, description = "Notification dispatched", body = WebhookAck),
        (status = 400, description = "Malformed event payload"),
        (status = 502, description = "Metadata provider or poster CDN unavailable"),
        (status = 500, description = "Gateway delivery failed")
    )
)]
pub async fn media_notification(
    State(state): State<AppState>,
    Json(event): Json<MediaEvent>,
) -> AppResult<Json<WebhookAck>> {
    tracing::info!(
        "Received media event: type={:?} tmdbid={:?} requested by {:?}",
        event.media_type,
        event.tmdbid,
        event.requested_by
    );

    if let Err(e) = state.notifier.notify(&event).await {
        tracing::error!("Failed to process media event: {}", e);
        return Err(e.into());
    }

    Ok(Json(WebhookAck {
        message: "Notification sent".to_string(),
    }))
}
