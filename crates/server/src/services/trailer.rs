use regex::{Regex, RegexBuilder};
use tmdb::MediaId;

use super::notify::traits::MetadataProvider;

/// One configured trailer-search language: the locale sent to the provider,
/// the label rendered into the message, and the name pattern that marks a
/// video as a trailer in that language.
#[derive(Debug, Clone)]
pub struct TrailerLanguage {
    pub code: String,
    pub label: String,
    pattern: Regex,
}

impl TrailerLanguage {
    pub fn new(code: &str, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        let label = code
            .split('-')
            .next()
            .unwrap_or(code)
            .to_uppercase();
        Ok(Self {
            code: code.to_string(),
            label,
            pattern,
        })
    }

    pub fn matches(&self, video_name: &str) -> bool {
        self.pattern.is_match(video_name)
    }
}

/// Search the provider's video listing for trailers in each configured
/// language and render the message block.
///
/// The listing is queried at the series level (season ids are
/// canonicalized first) and scanned in provider order; the first matching
/// video per language wins. A failed listing request logs and counts as
/// "no trailer"; trailer absence never aborts the pipeline.
pub async fn resolve_trailer_links(
    provider: &dyn MetadataProvider,
    media: &MediaId,
    languages: &[TrailerLanguage],
) -> Option<String> {
    let series = media.series();
    let mut links = Vec::new();

    for language in languages {
        match provider.videos(&series, &language.code).await {
            Ok(videos) => {
                if let Some(video) = videos.iter().find(|v| language.matches(&v.name)) {
                    links.push((
                        language.label.clone(),
                        format!("https://youtu.be/{}", video.key),
                    ));
                }
            }
            Err(e) => {
                tracing::warn!("Trailer search failed for {} ({}): {}", series, language.code, e);
            }
        }
    }

    trailer_block(&links)
}

/// Render found trailer links: none → no block, one → an unlabeled line,
/// two → labeled lines in configured order.
pub(crate) fn trailer_block(links: &[(String, String)]) -> Option<String> {
    match links {
        [] => None,
        [(_, url)] => Some(format!("• Trailer: {}\n", url)),
        _ => Some(
            links
                .iter()
                .map(|(label, url)| format!("• Trailer {}: {}", label, url))
                .collect::<Vec<_>>()
                .join("\n "),
        ),
    }
}
