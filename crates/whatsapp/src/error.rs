use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhatsappError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gateway error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
}
