use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Webhook payload sent by the media request manager when an item is
/// requested or becomes available.
///
/// Every field defaults to empty so that a sparse payload still reaches the
/// classifier; classification is total and unmatched shapes fall back to the
/// episode path.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct MediaEvent {
    /// `movie`, `tv`, or anything else.
    pub media_type: String,
    pub tmdbid: String,
    pub tvdbid: String,
    #[serde(rename = "requestedBy_username")]
    pub requested_by: String,
    /// Present (non-empty) only for season notifications.
    pub season_number: String,
    pub serie_name: String,
    /// Display title as the request manager rendered it. Used only on the
    /// episode path; movie and season titles come from the metadata
    /// provider.
    pub title: String,
    pub overview: String,
    /// Poster URL pre-resolved by the request manager, preferred over a
    /// provider lookup when present.
    pub image_url: String,
}

/// Acknowledgement body returned to the webhook caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WebhookAck {
    pub message: String,
}
