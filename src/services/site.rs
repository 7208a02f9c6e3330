use crate::config::SiteLayout;
use crate::domain::{
    Developer, DeveloperMap, DocumentStore, FeaturedPayload, Game, GameMap, SiteData, Video,
    FEATURED_LIMIT,
};
use crate::engine::templates::{
    developer_previews, developers_listing, game_previews, games_listing, showcase_previews,
    videos_listing, COMING_SOON,
};
use crate::engine::{
    replace_favicon, splice_section, DevelopersScraper, FeaturedScraper, GamesScraper, Section,
    SectionScraper, VideosScraper,
};
use crate::error::{Result, SiteError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Result of rewriting one page. Sections listed in `unanchored_sections`
/// were not found in the page and were left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub message: String,
    pub unanchored_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub message: String,
    pub updated_files: Vec<String>,
}

/// One planned rewrite of a page section.
struct Edit<'a> {
    section: Section,
    label: Option<&'a str>,
    fragment: String,
}

/// Read, transform and write site pages, one request at a time.
pub struct SiteService {
    store: Arc<dyn DocumentStore>,
    layout: SiteLayout,
}

impl SiteService {
    pub fn new(store: Arc<dyn DocumentStore>, layout: SiteLayout) -> Self {
        Self { store, layout }
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Everything currently published, extracted from the four pages.
    ///
    /// A page that is missing or that the host refuses to serve reads as
    /// empty; transport failures are returned.
    pub async fn current_data(&self) -> Result<SiteData> {
        let (games_page, showcases_page, developers_page, homepage) = tokio::join!(
            self.page_or_empty(&self.layout.games_page),
            self.page_or_empty(&self.layout.showcases_page),
            self.page_or_empty(&self.layout.developers_page),
            self.page_or_empty(&self.layout.homepage),
        );

        let data = SiteData {
            games: GamesScraper.extract(&games_page?),
            videos: VideosScraper.extract(&showcases_page?),
            developers: DevelopersScraper.extract(&developers_page?),
            featured: FeaturedScraper.extract(&homepage?),
        };

        info!(
            "Extracted {} games, {} videos, {} developers",
            data.games.len(),
            data.videos.len(),
            data.developers.len()
        );
        Ok(data)
    }

    async fn page_or_empty(&self, path: &str) -> Result<String> {
        match self.store.fetch_document(path).await {
            Ok(document) => Ok(document.content),
            Err(SiteError::NotFound(_)) => {
                warn!("Page {} not found, reading it as empty", path);
                Ok(String::new())
            }
            Err(SiteError::Upstream { status, message }) => {
                warn!("Page {} unavailable ({}): {}", path, status, message);
                Ok(String::new())
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update_games(&self, games: &GameMap) -> Result<UpdateOutcome> {
        let edit = Edit {
            section: Section::GamesGrid,
            label: None,
            fragment: games_listing(games),
        };
        let unanchored = self
            .rewrite(&self.layout.games_page, vec![edit], "Update games via admin panel")
            .await?;

        Ok(outcome("Games updated successfully", unanchored))
    }

    pub async fn update_showcases(&self, videos: &[Video]) -> Result<UpdateOutcome> {
        let edit = Edit {
            section: Section::VideosGrid,
            label: Some("Videos managed by admin panel"),
            fragment: videos_listing(videos),
        };
        let unanchored = self
            .rewrite(&self.layout.showcases_page, vec![edit], "Update showcases via admin panel")
            .await?;

        Ok(outcome("Showcases updated successfully", unanchored))
    }

    pub async fn update_developers(&self, developers: &DeveloperMap) -> Result<UpdateOutcome> {
        let edit = Edit {
            section: Section::DeveloperGrid,
            label: None,
            fragment: developers_listing(developers),
        };
        let unanchored = self
            .rewrite(&self.layout.developers_page, vec![edit], "Update developers via admin panel")
            .await?;

        Ok(outcome("Developers updated successfully", unanchored))
    }

    /// Rebuilds the homepage previews from the full collections: the first
    /// games and developers, and the most viewed videos.
    pub async fn update_homepage(
        &self,
        games: &GameMap,
        videos: &[Video],
        developers: &DeveloperMap,
    ) -> Result<UpdateOutcome> {
        let mut top_videos: Vec<&Video> = videos.iter().collect();
        top_videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        top_videos.truncate(FEATURED_LIMIT);

        let edits = preview_edits(
            games.values(),
            top_videos,
            developers.values(),
            ("Latest games", "Popular showcases"),
        );
        let unanchored = self
            .rewrite(&self.layout.homepage, edits, "Update homepage via admin panel")
            .await?;

        Ok(outcome("Homepage updated successfully", unanchored))
    }

    pub async fn update_featured(&self, featured: FeaturedPayload) -> Result<UpdateOutcome> {
        let featured = featured.capped();
        let edits = preview_edits(
            featured.featured_games.iter().map(|(_, game)| game),
            featured.featured_showcases.iter(),
            featured.featured_developers.iter().map(|(_, developer)| developer),
            ("Featured games", "Featured showcases"),
        );
        let unanchored = self
            .rewrite(&self.layout.homepage, edits, "Update featured content via admin panel")
            .await?;

        Ok(outcome("Featured content updated successfully", unanchored))
    }

    /// Points every configured page at a new favicon. Pages that fail or
    /// carry no favicon tag are skipped.
    pub async fn update_icon(&self, icon_url: &str) -> Result<IconOutcome> {
        let mut updated_files = Vec::new();

        for path in &self.layout.icon_pages {
            let document = match self.store.fetch_document(path).await {
                Ok(document) => document,
                Err(err) => {
                    warn!("Skipping icon update for {}: {}", path, err);
                    continue;
                }
            };

            let spliced = replace_favicon(&document.content, icon_url);
            if !spliced.anchored {
                warn!("No favicon tag in {}, leaving it unchanged", path);
                continue;
            }

            match self
                .store
                .write_document(
                    path,
                    &spliced.document,
                    &document.revision,
                    "Update website icon via admin panel",
                )
                .await
            {
                Ok(()) => updated_files.push(path.clone()),
                Err(err) => error!("Failed to update icon in {}: {}", path, err),
            }
        }

        info!("Icon updated in {} files", updated_files.len());
        Ok(IconOutcome {
            message: format!("Website icon updated in {} files", updated_files.len()),
            updated_files,
        })
    }

    /// Applies `edits` to the page at `path` and writes it back once.
    /// Returns the names of the sections that could not be located.
    async fn rewrite(&self, path: &str, edits: Vec<Edit<'_>>, message: &str) -> Result<Vec<String>> {
        let document = self.store.fetch_document(path).await?;

        let mut content = document.content;
        let mut unanchored = Vec::new();
        let mut changed = false;

        for edit in edits {
            let spliced = splice_section(&content, edit.section, edit.label, &edit.fragment);
            if spliced.anchored {
                changed = true;
                content = spliced.document;
            } else {
                unanchored.push(edit.section.name().to_string());
            }
        }

        if changed {
            self.store
                .write_document(path, &content, &document.revision, message)
                .await?;
            info!("Rewrote {}", path);
        } else {
            warn!("Nothing to rewrite in {}", path);
        }

        Ok(unanchored)
    }
}

fn outcome(message: &str, unanchored_sections: Vec<String>) -> UpdateOutcome {
    UpdateOutcome {
        message: message.to_string(),
        unanchored_sections,
    }
}

/// Homepage rows: games and developers only when there is something to
/// show, showcases fall back to the placeholder.
fn preview_edits<'a, 'l>(
    games: impl IntoIterator<Item = &'a Game>,
    videos: impl IntoIterator<Item = &'a Video>,
    developers: impl IntoIterator<Item = &'a Developer>,
    (games_label, showcases_label): (&'l str, &'l str),
) -> Vec<Edit<'l>> {
    let games: Vec<&Game> = games.into_iter().take(FEATURED_LIMIT).collect();
    let videos: Vec<&Video> = videos.into_iter().take(FEATURED_LIMIT).collect();
    let developers: Vec<&Developer> = developers.into_iter().take(FEATURED_LIMIT).collect();
    let mut edits = Vec::new();

    if !games.is_empty() {
        edits.push(Edit {
            section: Section::LatestGames,
            label: Some(games_label),
            fragment: game_previews(games),
        });
    }

    edits.push(if videos.is_empty() {
        Edit {
            section: Section::PopularShowcases,
            label: None,
            fragment: COMING_SOON.to_string(),
        }
    } else {
        Edit {
            section: Section::PopularShowcases,
            label: Some(showcases_label),
            fragment: showcase_previews(videos),
        }
    });

    if !developers.is_empty() {
        edits.push(Edit {
            section: Section::DeveloperPreview,
            label: None,
            fragment: developer_previews(developers),
        });
    }

    edits
}
