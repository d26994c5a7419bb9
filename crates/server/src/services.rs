pub mod classify;
pub mod message;
pub mod notify;
pub mod poster;
pub mod trailer;

pub use classify::{classify, EventKind};
pub use notify::{NotificationService, NotifyError};
pub use poster::{PosterArtifact, PosterService};
pub use trailer::TrailerLanguage;
