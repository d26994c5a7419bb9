use std::fmt;

use serde::Deserialize;

/// Top-level media kind as TMDB routes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured TMDB media identifier.
///
/// Replaces string-spliced paths like `tv/1396/season/2`: the kind and
/// numeric ids are explicit, and `series()` is the canonicalization that
/// used to be done with a regex over the composite string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId {
    kind: MediaKind,
    id: i64,
    season: Option<i64>,
}

impl MediaId {
    pub fn movie(id: i64) -> Self {
        Self {
            kind: MediaKind::Movie,
            id,
            season: None,
        }
    }

    pub fn tv(id: i64) -> Self {
        Self {
            kind: MediaKind::Tv,
            id,
            season: None,
        }
    }

    pub fn season(series_id: i64, season_number: i64) -> Self {
        Self {
            kind: MediaKind::Tv,
            id: series_id,
            season: Some(season_number),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// The id with any season qualifier dropped.
    ///
    /// TMDB indexes videos and images at the series level, so season ids
    /// must be canonicalized before hitting those endpoints.
    pub fn series(&self) -> MediaId {
        Self {
            season: None,
            ..*self
        }
    }

    /// Provider path segment, e.g. `movie/603` or `tv/1396/season/2`.
    pub fn path(&self) -> String {
        match self.season {
            Some(season) => format!("{}/{}/season/{}", self.kind, self.id, season),
            None => format!("{}/{}", self.kind, self.id),
        }
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Title, synopsis and poster reference for one media item.
///
/// Fields the provider omitted come back empty rather than as errors; the
/// caller decides which absences are fatal.
#[derive(Debug, Clone, Default)]
pub struct MediaDetails {
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
}

/// One entry from the videos listing of a movie or series.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default, rename = "type")]
    pub video_type: Option<String>,
}

/// One poster entry from the images listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Poster {
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_path() {
        assert_eq!(MediaId::movie(603).path(), "movie/603");
    }

    #[test]
    fn test_tv_path() {
        assert_eq!(MediaId::tv(1396).path(), "tv/1396");
    }

    #[test]
    fn test_season_path() {
        assert_eq!(MediaId::season(1396, 2).path(), "tv/1396/season/2");
    }

    #[test]
    fn test_series_drops_season_qualifier() {
        let season = MediaId::season(1396, 2);
        assert_eq!(season.series(), MediaId::tv(1396));
        assert_eq!(season.series().path(), "tv/1396");
    }

    #[test]
    fn test_series_is_identity_without_season() {
        assert_eq!(MediaId::movie(603).series(), MediaId::movie(603));
    }
}
