use std::io::Write;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tmdb::MediaId;

use super::notify::traits::MetadataProvider;
use super::notify::NotifyError;

/// Upper bound on a single poster download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// A downloaded poster held in a transient file, exclusively owned by the
/// current pipeline run. The file is removed when the artifact drops:
/// release happens exactly once on every exit path, including a failed
/// dispatch.
#[derive(Debug)]
pub struct PosterArtifact {
    file: NamedTempFile,
}

impl PosterArtifact {
    pub fn from_bytes(bytes: &[u8]) -> std::io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Downloads poster images into transient artifacts.
pub struct PosterService {
    client: Client,
}

impl PosterService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the image at `url` into a fresh artifact.
    ///
    /// Non-2xx responses and network failures are errors: a poster is
    /// optional content, but a failed download must not silently yield a
    /// corrupt or empty artifact.
    pub async fn fetch(&self, url: &str) -> Result<PosterArtifact, NotifyError> {
        let response = self
            .client
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(NotifyError::PosterDownload)?;
        let bytes = response.bytes().await.map_err(NotifyError::PosterDownload)?;
        Ok(PosterArtifact::from_bytes(&bytes)?)
    }
}

/// Resolve the poster URL for a movie or season event, or `None` when the
/// item simply has no poster anywhere.
///
/// Order: the request manager's own `image_url`, then the resolved details'
/// poster reference, then the provider's series-level image listing filtered
/// to the primary language and finally unfiltered. An empty listing is
/// "feature absent"; a failed listing request propagates.
pub async fn resolve_poster_url(
    provider: &dyn MetadataProvider,
    media: &MediaId,
    event_image_url: &str,
    details_poster: Option<&str>,
    primary_language: &str,
) -> Result<Option<String>, NotifyError> {
    if !event_image_url.is_empty() {
        return Ok(Some(event_image_url.to_string()));
    }

    if let Some(path) = details_poster {
        return Ok(Some(tmdb::poster_url(path)));
    }

    // Image listings live at the series level, keyed by bare language subtag.
    let series = media.series();
    let subtag = primary_language.split('-').next().unwrap_or(primary_language);

    let posters = provider.posters(&series, Some(subtag)).await?;
    if let Some(poster) = posters.first() {
        return Ok(Some(tmdb::poster_url(&poster.file_path)));
    }

    let posters = provider.posters(&series, None).await?;
    Ok(posters.first().map(|p| tmdb::poster_url(&p.file_path)))
}
