use super::{Developer, Game, Video};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Games keyed by their derived identifier, in listing order.
pub type GameMap = IndexMap<String, Game>;

/// Developers keyed by their derived identifier, in listing order.
pub type DeveloperMap = IndexMap<String, Developer>;

/// Everything the admin surface edits, as served by `GET /api/get-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub games: GameMap,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub developers: DeveloperMap,
    #[serde(default)]
    pub featured: FeaturedSelection,
}

impl SiteData {
    pub fn stats(&self) -> SiteStats {
        SiteStats {
            total_games: self.games.len(),
            working_games: self
                .games
                .values()
                .filter(|game| game.status == super::GameStatus::Working)
                .count(),
            total_videos: self.videos.len(),
            total_developers: self.developers.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_games: usize,
    pub working_games: usize,
    pub total_videos: usize,
    pub total_developers: usize,
}

/// Lightweight references to what the homepage currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSelection {
    #[serde(default)]
    pub games: Vec<FeaturedGame>,
    #[serde(default)]
    pub showcases: Vec<FeaturedShowcase>,
    #[serde(default)]
    pub developers: Vec<FeaturedDeveloper>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGame {
    pub name: String,
    pub game_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedShowcase {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedDeveloper {
    pub name: String,
}

/// The homepage preview is a display contract of three cards per row.
pub const FEATURED_LIMIT: usize = 3;

/// Full records picked for the homepage, as sent to `POST /api/update-featured`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPayload {
    #[serde(default)]
    pub featured_games: Vec<(String, Game)>,
    #[serde(default)]
    pub featured_showcases: Vec<Video>,
    #[serde(default)]
    pub featured_developers: Vec<(String, Developer)>,
}

impl FeaturedPayload {
    pub fn capped(mut self) -> Self {
        self.featured_games.truncate(FEATURED_LIMIT);
        self.featured_showcases.truncate(FEATURED_LIMIT);
        self.featured_developers.truncate(FEATURED_LIMIT);
        self
    }
}
