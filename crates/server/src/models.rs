pub mod event;

pub use event::{MediaEvent, WebhookAck};
