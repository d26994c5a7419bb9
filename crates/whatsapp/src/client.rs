use reqwest::{Client, RequestBuilder};

use crate::error::WhatsappError;

/// Client for a go-whatsapp-web-multidevice style HTTP gateway.
///
/// All send endpoints are POSTs under basic auth; the gateway treats any
/// 2xx response as accepted for delivery.
pub struct WhatsappClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl WhatsappClient {
    /// Create a WhatsappClient with a reqwest Client.
    pub fn with_client(client: Client, base_url: &str, username: &str, password: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    pub(crate) async fn handle_response(&self, response: reqwest::Response) -> crate::Result<()> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WhatsappError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
