use serde::Deserialize;

use crate::client::REQUEST_TIMEOUT;
use crate::models::{MediaId, Poster};
use crate::TmdbClient;

/// Fixed-size poster rendition served by the TMDB image CDN.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Build a downloadable poster URL from a provider poster reference.
pub fn poster_url(file_path: &str) -> String {
    format!("{}{}", IMAGE_BASE_URL, file_path)
}

#[derive(Debug, Deserialize)]
struct ImageList {
    #[serde(default)]
    posters: Vec<Poster>,
}

impl TmdbClient {
    /// List poster images for a movie or TV series.
    ///
    /// GET /{media_path}/images
    ///
    /// `language` narrows the listing to posters tagged with that language
    /// (TMDB expects the bare primary subtag here, e.g. `fr`); `None`
    /// returns posters in every language.
    pub async fn list_posters(
        &self,
        media: &MediaId,
        language: Option<&str>,
    ) -> crate::Result<Vec<Poster>> {
        let url = self.url(&format!("/{}/images", media.path()));
        let mut request = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key())])
            .timeout(REQUEST_TIMEOUT);
        if let Some(language) = language {
            request = request.query(&[("language", language)]);
        }

        let response = request.send().await?;
        let list: ImageList = self.handle_response(response).await?;
        Ok(list.posters)
    }
}
