use std::sync::LazyLock;

use regex::Regex;
use tmdb::MediaId;

/// Titles for episode notifications arrive as
/// "Episode added • <series> SxxEyy <name> - Épisode N"; the trailing
/// episode counter is noise once the series part is kept.
static EPISODE_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Episode added • .+?) - Épisode \d+").expect("Invalid episode title pattern")
});

/// Strip the episode-counter suffix from a request-manager episode title.
/// Titles that don't match the known shape pass through unchanged.
pub fn normalize_episode_title(title: &str) -> String {
    match EPISODE_TITLE_PATTERN.captures(title) {
        Some(captures) => captures[1].to_string(),
        None => title.to_string(),
    }
}

/// Shortened metadata-provider link for movies and episodes.
pub fn tmdb_link(media: &MediaId) -> String {
    format!("● TMDb: https://tmdb.org/{}", media.path())
}

/// External TV-database link for seasons.
pub fn tvdb_link(serie_name: &str, season_number: i64) -> String {
    format!(
        "● TVDb: https://thetvdb.com/series/{}/seasons/official/{}",
        serie_name, season_number
    )
}

/// Render the notification body. The template is opaque text for the
/// messaging channel; nothing is escaped.
pub fn format_message(
    title: &str,
    requested_by: &str,
    overview: &str,
    media_link: &str,
    trailer: Option<&str>,
) -> String {
    let mut message = format!("*{}*\n", title);

    message.push_str(&format!("  → added by {}\n", requested_by));

    if !overview.is_empty() {
        message.push_str(&format!("```{}```\n", overview));
    }

    message.push_str(&format!("{}\n", media_link));

    if let Some(trailer) = trailer {
        message.push_str(trailer);
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_message() {
        let message = format_message(
            "The Matrix",
            "alice",
            "A hacker discovers...",
            "● TMDb: https://tmdb.org/movie/603",
            None,
        );
        assert_eq!(
            message,
            "*The Matrix*\n  → added by alice\n```A hacker discovers...```\n● TMDb: https://tmdb.org/movie/603\n"
        );
    }

    #[test]
    fn test_overview_block_omitted_when_empty() {
        let message = format_message("Title", "bob", "", "link", None);
        assert_eq!(message, "*Title*\n  → added by bob\nlink\n");
        assert!(!message.contains("```"));
    }

    #[test]
    fn test_overview_text_is_unmodified() {
        let overview = "Line *with* `markup` and\nnewlines";
        let message = format_message("T", "u", overview, "link", None);
        assert!(message.contains(&format!("```{}```\n", overview)));
    }

    #[test]
    fn test_trailer_appended_when_present() {
        let message = format_message("T", "u", "", "link", Some("• Trailer: https://youtu.be/k\n"));
        assert!(message.ends_with("link\n• Trailer: https://youtu.be/k\n"));
    }

    #[test]
    fn test_tmdb_link() {
        assert_eq!(
            tmdb_link(&MediaId::movie(603)),
            "● TMDb: https://tmdb.org/movie/603"
        );
        assert_eq!(
            tmdb_link(&MediaId::tv(1396)),
            "● TMDb: https://tmdb.org/tv/1396"
        );
    }

    #[test]
    fn test_tvdb_link() {
        assert_eq!(
            tvdb_link("Breaking Bad", 2),
            "● TVDb: https://thetvdb.com/series/Breaking Bad/seasons/official/2"
        );
    }

    #[test]
    fn test_normalize_episode_title_strips_counter() {
        assert_eq!(
            normalize_episode_title("Episode added • Dark S01E03 Past and Present - Épisode 3"),
            "Episode added • Dark S01E03 Past and Present"
        );
    }

    #[test]
    fn test_normalize_episode_title_passthrough() {
        assert_eq!(normalize_episode_title("Some other title"), "Some other title");
        assert_eq!(normalize_episode_title(""), "");
    }
}
