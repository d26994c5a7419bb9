#[cfg(test)]
pub mod mocks;
pub mod traits;

use std::sync::Arc;

use thiserror::Error;
use tmdb::MediaId;

use crate::config::Config;
use crate::models::MediaEvent;

use super::classify::{classify, EventKind};
use super::message::{format_message, normalize_episode_title, tmdb_link, tvdb_link};
use super::poster::{resolve_poster_url, PosterArtifact, PosterService};
use super::trailer::{resolve_trailer_links, TrailerLanguage};
use self::traits::{MessageSender, MetadataProvider};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("TMDB API error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),

    #[error("WhatsApp gateway error: {0}")]
    Whatsapp(#[from] whatsapp::WhatsappError),

    #[error("Poster download failed: {0}")]
    PosterDownload(reqwest::Error),

    #[error("Poster I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field} in event: {value:?}")]
    InvalidEvent { field: &'static str, value: String },

    #[error("No title available for {media}")]
    MissingTitle { media: String },

    #[error("Invalid trailer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Runs the enrichment-and-dispatch pipeline for one inbound event.
///
/// Each event is processed end to end within its own request context; the
/// only state shared across events is the read-only configuration and the
/// HTTP connection pools inside the clients.
pub struct NotificationService {
    metadata: Arc<dyn MetadataProvider>,
    sender: Arc<dyn MessageSender>,
    poster: PosterService,
    recipient: String,
    primary_language: String,
    /// Trailer search languages, primary first.
    languages: Vec<TrailerLanguage>,
}

impl NotificationService {
    pub fn new(
        config: &Config,
        metadata: Arc<dyn MetadataProvider>,
        sender: Arc<dyn MessageSender>,
        http_client: reqwest::Client,
    ) -> Result<Self, NotifyError> {
        let languages = vec![
            TrailerLanguage::new(
                &config.tmdb.primary_language,
                &config.tmdb.primary_trailer_pattern,
            )?,
            TrailerLanguage::new(
                &config.tmdb.secondary_language,
                &config.tmdb.secondary_trailer_pattern,
            )?,
        ];

        Ok(Self {
            metadata,
            sender,
            poster: PosterService::new(http_client),
            recipient: config.whatsapp.recipient.clone(),
            primary_language: config.tmdb.primary_language.clone(),
            languages,
        })
    }

    /// Classify the event and run the matching pipeline.
    pub async fn notify(&self, event: &MediaEvent) -> Result<(), NotifyError> {
        match classify(event) {
            EventKind::Movie => self.notify_movie(event).await,
            EventKind::Season => self.notify_season(event).await,
            EventKind::Episode => self.notify_episode(event).await,
        }
    }

    async fn notify_movie(&self, event: &MediaEvent) -> Result<(), NotifyError> {
        let media = MediaId::movie(parse_id("tmdbid", &event.tmdbid)?);
        let details = self.metadata.details(&media, &self.primary_language).await?;
        if details.title.is_empty() {
            return Err(NotifyError::MissingTitle {
                media: media.to_string(),
            });
        }

        let trailer = resolve_trailer_links(self.metadata.as_ref(), &media, &self.languages).await;
        let poster = self
            .fetch_poster(event, &media, details.poster_path.as_deref())
            .await?;

        let message = format_message(
            &details.title,
            &event.requested_by,
            &details.overview,
            &tmdb_link(&media),
            trailer.as_deref(),
        );
        self.dispatch(&message, poster).await
    }

    async fn notify_season(&self, event: &MediaEvent) -> Result<(), NotifyError> {
        let series_id = parse_id("tmdbid", &event.tmdbid)?;
        let season_number = parse_id("season_number", &event.season_number)?;
        let media = MediaId::season(series_id, season_number);

        let details = self.metadata.details(&media, &self.primary_language).await?;
        if details.title.is_empty() {
            return Err(NotifyError::MissingTitle {
                media: media.to_string(),
            });
        }

        let trailer = resolve_trailer_links(self.metadata.as_ref(), &media, &self.languages).await;
        let poster = self
            .fetch_poster(event, &media, details.poster_path.as_deref())
            .await?;

        let message = format_message(
            &details.title,
            &event.requested_by,
            &details.overview,
            &tvdb_link(&event.serie_name, season_number),
            trailer.as_deref(),
        );
        self.dispatch(&message, poster).await
    }

    /// Episodes keep the request manager's own title and go out as plain
    /// text: no poster, no trailer search. The provider is consulted only
    /// for the synopsis.
    async fn notify_episode(&self, event: &MediaEvent) -> Result<(), NotifyError> {
        let media = MediaId::tv(parse_id("tmdbid", &event.tmdbid)?);
        let details = self.metadata.details(&media, &self.primary_language).await?;

        let title = normalize_episode_title(&event.title);
        let message = format_message(
            &title,
            &event.requested_by,
            &details.overview,
            &tmdb_link(&media),
            None,
        );
        self.dispatch(&message, None).await
    }

    async fn fetch_poster(
        &self,
        event: &MediaEvent,
        media: &MediaId,
        details_poster: Option<&str>,
    ) -> Result<Option<PosterArtifact>, NotifyError> {
        let url = resolve_poster_url(
            self.metadata.as_ref(),
            media,
            &event.image_url,
            details_poster,
            &self.primary_language,
        )
        .await?;

        match url {
            Some(url) => Ok(Some(self.poster.fetch(&url).await?)),
            None => Ok(None),
        }
    }

    /// Send the message, as an image message when a poster was downloaded.
    ///
    /// The artifact is consumed here and dropped once the gateway call
    /// returns, so the transient file is gone on success and failure alike.
    pub(crate) async fn dispatch(
        &self,
        message: &str,
        poster: Option<PosterArtifact>,
    ) -> Result<(), NotifyError> {
        let result = match &poster {
            Some(artifact) => {
                let image = tokio::fs::read(artifact.path()).await?;
                self.sender
                    .send_image(&self.recipient, message, image)
                    .await
            }
            None => self.sender.send_text(&self.recipient, message).await,
        };
        drop(poster);
        Ok(result?)
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<i64, NotifyError> {
    value
        .trim()
        .parse()
        .map_err(|_| NotifyError::InvalidEvent {
            field,
            value: value.to_string(),
        })
}
