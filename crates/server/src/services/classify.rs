use crate::models::MediaEvent;

/// Which notification pipeline an inbound event runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Movie,
    Season,
    Episode,
}

/// Classify an inbound event. Total over all payloads: a TV event with a
/// season number is a season, a movie event is a movie, and everything else
/// (including missing or garbage `media_type`, and TV without a season)
/// falls back to the episode pipeline. No other component re-derives this
/// decision.
pub fn classify(event: &MediaEvent) -> EventKind {
    match event.media_type.as_str() {
        "tv" if !event.season_number.is_empty() => EventKind::Season,
        "movie" => EventKind::Movie,
        _ => EventKind::Episode,
    }
}
