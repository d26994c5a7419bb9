mod client;
mod details;
mod error;
mod images;
mod videos;
pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use images::poster_url;
pub use models::{MediaDetails, MediaId, MediaKind, Poster, Video};

pub type Result<T> = std::result::Result<T, TmdbError>;
