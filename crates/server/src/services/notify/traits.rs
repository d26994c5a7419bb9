//! Trait abstractions over the external services the pipeline talks to.
//!
//! These seams let the notification service be exercised in tests with
//! recording mocks instead of live HTTP clients.

use async_trait::async_trait;
use tmdb::{MediaDetails, MediaId, Poster, TmdbClient, Video};
use whatsapp::WhatsappClient;

/// Read access to the metadata provider.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolve title/overview/poster for a media item in one language.
    async fn details(&self, media: &MediaId, language: &str) -> tmdb::Result<MediaDetails>;

    /// List videos for a movie or series, in provider order.
    async fn videos(&self, media: &MediaId, language: &str) -> tmdb::Result<Vec<Video>>;

    /// List posters for a movie or series; `language` narrows the listing.
    async fn posters(&self, media: &MediaId, language: Option<&str>) -> tmdb::Result<Vec<Poster>>;
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn details(&self, media: &MediaId, language: &str) -> tmdb::Result<MediaDetails> {
        self.get_details(media, language).await
    }

    async fn videos(&self, media: &MediaId, language: &str) -> tmdb::Result<Vec<Video>> {
        self.list_videos(media, language).await
    }

    async fn posters(&self, media: &MediaId, language: Option<&str>) -> tmdb::Result<Vec<Poster>> {
        self.list_posters(media, language).await
    }
}

/// Outbound messaging channel.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, recipient: &str, message: &str) -> whatsapp::Result<()>;

    async fn send_image(
        &self,
        recipient: &str,
        caption: &str,
        image: Vec<u8>,
    ) -> whatsapp::Result<()>;
}

#[async_trait]
impl MessageSender for WhatsappClient {
    async fn send_text(&self, recipient: &str, message: &str) -> whatsapp::Result<()> {
        self.send_message(recipient, message).await
    }

    async fn send_image(
        &self,
        recipient: &str,
        caption: &str,
        image: Vec<u8>,
    ) -> whatsapp::Result<()> {
        WhatsappClient::send_image(self, recipient, caption, image).await
    }
}
