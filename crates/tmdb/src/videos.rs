use serde::Deserialize;

use crate::client::REQUEST_TIMEOUT;
use crate::models::{MediaId, Video};
use crate::TmdbClient;

#[derive(Debug, Deserialize)]
struct VideoList {
    #[serde(default)]
    results: Vec<Video>,
}

impl TmdbClient {
    /// List the videos attached to a movie or TV series, in provider order.
    ///
    /// GET /{media_path}/videos
    ///
    /// Videos are indexed at the movie/series level; pass a series id
    /// (`MediaId::series`) rather than a season-qualified one.
    pub async fn list_videos(&self, media: &MediaId, language: &str) -> crate::Result<Vec<Video>> {
        let url = self.url(&format!("/{}/videos", media.path()));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", language)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let list: VideoList = self.handle_response(response).await?;
        Ok(list.results)
    }
}
