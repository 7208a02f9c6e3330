use crate::domain::{FeaturedDeveloper, FeaturedGame, FeaturedSelection, FeaturedShowcase};
use crate::engine::sections::Section;
use once_cell::sync::Lazy;
use regex::Regex;

/// Reads the homepage preview rows back as lightweight references.
///
/// The homepage holds three rows, each located on its own, so this scraper
/// works on the whole document rather than a single section.
pub struct FeaturedScraper;

static PREVIEW_GAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="game-card[^>]*>.*?<h3>([^<]+)</h3>.*?<div class="game-id"># ([^<]+)</div>"#)
        .unwrap()
});
static PREVIEW_SHOWCASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="showcase-card[^>]*onclick="window\.open\('([^']+)'[^>]*>.*?<h3 class="showcase-title">([^<]+)</h3>"#)
        .unwrap()
});
static PREVIEW_DEVELOPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="dev-card-mini[^>]*>.*?<h3 class="dev-name-mini">([^<]+)</h3>"#)
        .unwrap()
});

const PLACEHOLDER_MARKER: &str = "Coming Soon";

impl FeaturedScraper {
    pub fn extract(&self, document: &str) -> FeaturedSelection {
        FeaturedSelection {
            games: Self::games(document),
            showcases: Self::showcases(document),
            developers: Self::developers(document),
        }
    }

    fn games(document: &str) -> Vec<FeaturedGame> {
        Section::LatestGames
            .inner(document)
            .map(|row| {
                PREVIEW_GAME
                    .captures_iter(row)
                    .map(|caps| FeaturedGame {
                        name: caps[1].trim().to_string(),
                        game_id: caps[2].trim().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn showcases(document: &str) -> Vec<FeaturedShowcase> {
        Section::PopularShowcases
            .inner(document)
            .filter(|row| !row.contains(PLACEHOLDER_MARKER))
            .map(|row| {
                PREVIEW_SHOWCASE
                    .captures_iter(row)
                    .map(|caps| FeaturedShowcase {
                        url: caps[1].trim().to_string(),
                        title: caps[2].trim().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn developers(document: &str) -> Vec<FeaturedDeveloper> {
        Section::DeveloperPreview
            .inner(document)
            .map(|row| {
                PREVIEW_DEVELOPER
                    .captures_iter(row)
                    .map(|caps| FeaturedDeveloper {
                        name: caps[1].trim().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
