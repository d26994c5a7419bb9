//! Recording mock implementations of the pipeline's external seams.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tmdb::{MediaDetails, MediaId, Poster, TmdbError, Video};
use whatsapp::WhatsappError;

use super::traits::{MessageSender, MetadataProvider};

fn api_error() -> TmdbError {
    TmdbError::Api {
        status_code: 500,
        message: "mock failure".to_string(),
    }
}

/// Mock metadata provider keyed by provider path.
#[derive(Default)]
pub struct MockMetadataProvider {
    details: Mutex<HashMap<String, MediaDetails>>,
    videos: Mutex<HashMap<String, Vec<Video>>>,
    posters: Mutex<HashMap<String, Vec<Poster>>>,
    fail_videos: Mutex<bool>,
    /// Provider paths of every videos listing request, for verification.
    video_requests: Mutex<Vec<String>>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_details(&self, media: &MediaId, details: MediaDetails) {
        self.details.lock().unwrap().insert(media.path(), details);
    }

    pub fn insert_video(&self, media: &MediaId, language: &str, name: &str, key: &str) {
        let video = Video {
            key: key.to_string(),
            name: name.to_string(),
            site: Some("YouTube".to_string()),
            video_type: Some("Trailer".to_string()),
        };
        self.videos
            .lock()
            .unwrap()
            .entry(format!("{}:{}", media.path(), language))
            .or_default()
            .push(video);
    }

    pub fn insert_poster(&self, media: &MediaId, language: Option<&str>, file_path: &str) {
        self.posters
            .lock()
            .unwrap()
            .entry(format!("{}:{}", media.path(), language.unwrap_or("*")))
            .or_default()
            .push(Poster {
                file_path: file_path.to_string(),
            });
    }

    /// Make every videos listing request fail.
    pub fn fail_videos(&self) {
        *self.fail_videos.lock().unwrap() = true;
    }

    pub fn video_requests(&self) -> Vec<String> {
        self.video_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn details(&self, media: &MediaId, _language: &str) -> tmdb::Result<MediaDetails> {
        self.details
            .lock()
            .unwrap()
            .get(&media.path())
            .cloned()
            .ok_or_else(api_error)
    }

    async fn videos(&self, media: &MediaId, language: &str) -> tmdb::Result<Vec<Video>> {
        self.video_requests.lock().unwrap().push(media.path());
        if *self.fail_videos.lock().unwrap() {
            return Err(api_error());
        }
        Ok(self
            .videos
            .lock()
            .unwrap()
            .get(&format!("{}:{}", media.path(), language))
            .cloned()
            .unwrap_or_default())
    }

    async fn posters(&self, media: &MediaId, language: Option<&str>) -> tmdb::Result<Vec<Poster>> {
        Ok(self
            .posters
            .lock()
            .unwrap()
            .get(&format!("{}:{}", media.path(), language.unwrap_or("*")))
            .cloned()
            .unwrap_or_default())
    }
}

/// A message recorded by [`MockMessageSender`].
#[derive(Debug, Clone, PartialEq)]
pub enum SentMessage {
    Text {
        recipient: String,
        message: String,
    },
    Image {
        recipient: String,
        caption: String,
        image_len: usize,
    },
}

/// Mock messaging gateway recording every send.
#[derive(Default)]
pub struct MockMessageSender {
    sent: Mutex<Vec<SentMessage>>,
    fail: Mutex<bool>,
}

impl MockMessageSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail with a gateway error.
    pub fn fail(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn gateway_error(&self) -> Option<WhatsappError> {
        self.fail.lock().unwrap().then(|| WhatsappError::Api {
            status_code: 503,
            message: "mock gateway down".to_string(),
        })
    }
}

#[async_trait]
impl MessageSender for MockMessageSender {
    async fn send_text(&self, recipient: &str, message: &str) -> whatsapp::Result<()> {
        if let Some(e) = self.gateway_error() {
            return Err(e);
        }
        self.sent.lock().unwrap().push(SentMessage::Text {
            recipient: recipient.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    async fn send_image(
        &self,
        recipient: &str,
        caption: &str,
        image: Vec<u8>,
    ) -> whatsapp::Result<()> {
        if let Some(e) = self.gateway_error() {
            return Err(e);
        }
        self.sent.lock().unwrap().push(SentMessage::Image {
            recipient: recipient.to_string(),
            caption: caption.to_string(),
            image_len: image.len(),
        });
        Ok(())
    }
}
