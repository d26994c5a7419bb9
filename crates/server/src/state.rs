use std::sync::Arc;

use reqwest::Client;
use tmdb::TmdbClient;
use whatsapp::WhatsappClient;

use crate::config::Config;
use crate::services::notify::traits::{MessageSender, MetadataProvider};
use crate::services::{NotificationService, NotifyError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub tmdb: Arc<TmdbClient>,
    pub whatsapp: Arc<WhatsappClient>,
    pub notifier: Arc<NotificationService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, NotifyError> {
        let http_client = Client::new();
        let tmdb = Arc::new(TmdbClient::with_client(
            http_client.clone(),
            &config.tmdb.api_key,
        ));
        let whatsapp = Arc::new(WhatsappClient::with_client(
            http_client.clone(),
            &config.whatsapp.api_url,
            &config.whatsapp.username,
            &config.whatsapp.password,
        ));

        let notifier = Arc::new(NotificationService::new(
            &config,
            Arc::clone(&tmdb) as Arc<dyn MetadataProvider>,
            Arc::clone(&whatsapp) as Arc<dyn MessageSender>,
            http_client.clone(),
        )?);

        Ok(Self {
            config: Arc::new(config),
            http_client,
            tmdb,
            whatsapp,
            notifier,
        })
    }
}
