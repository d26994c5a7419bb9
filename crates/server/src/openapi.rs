use utoipa::OpenApi;

use crate::models::{MediaEvent, WebhookAck};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seerr Notify API",
        version = "1.0.0"
    ),
    paths(crate::api::handlers::webhook::media_notification),
    tags(
        (name = "webhook", description = "Media request manager webhook")
    ),
    components(schemas(MediaEvent, WebhookAck))
)]
pub struct ApiDoc;
