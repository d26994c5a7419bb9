use serde::Deserialize;

use crate::client::REQUEST_TIMEOUT;
use crate::models::{MediaDetails, MediaId};
use crate::TmdbClient;

/// Raw details payload. Movies carry `title`, series and seasons carry
/// `name`; everything else the pipeline needs is optional on the wire.
#[derive(Debug, Deserialize)]
struct RawDetails {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
}

impl TmdbClient {
    /// Get title, synopsis and poster reference for a media item.
    ///
    /// GET /{media_path}
    pub async fn get_details(&self, media: &MediaId, language: &str) -> crate::Result<MediaDetails> {
        let url = self.url(&format!("/{}", media.path()));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", language)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let raw: RawDetails = self.handle_response(response).await?;

        Ok(MediaDetails {
            title: raw.title.or(raw.name).unwrap_or_default(),
            overview: raw.overview.unwrap_or_default(),
            poster_path: raw.poster_path,
        })
    }
}
