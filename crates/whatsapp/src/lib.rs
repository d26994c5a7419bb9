mod client;
mod error;
mod send;

pub use client::WhatsappClient;
pub use error::WhatsappError;

pub type Result<T> = std::result::Result<T, WhatsappError>;
