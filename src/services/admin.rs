use crate::domain::{
    Developer, FeaturedDeveloper, FeaturedGame, FeaturedPayload, FeaturedSelection,
    FeaturedShowcase, Game, SiteData, SiteStats, Video, FEATURED_LIMIT,
};
use crate::error::{Result, SiteError};
use crate::services::text_utils::{display_date, extract_video_id, TitleNormalizer};
use chrono::{DateTime, Utc};
use tracing::info;

const DEFAULT_VIDEO_DESCRIPTION: &str = "Script showcase and gameplay demonstration.";

/// The admin's working copy of the site data.
///
/// Every mutation here is local; publishing is the session's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    data: SiteData,
}

impl AdminState {
    pub fn new(data: SiteData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &SiteData {
        &self.data
    }

    pub fn stats(&self) -> SiteStats {
        self.data.stats()
    }

    /// Adds a game under a key derived from its name and returns the key.
    pub fn add_game(&mut self, game: Game) -> String {
        let base = TitleNormalizer::slug(&game.name);
        let key = TitleNormalizer::unique_id(&base, |candidate| {
            self.data.games.contains_key(candidate)
        });
        info!("Adding game {} as {}", game.name, key);
        self.data.games.insert(key.clone(), game);
        key
    }

    pub fn edit_game(&mut self, key: &str, game: Game) -> Result<()> {
        let slot = self
            .data
            .games
            .get_mut(key)
            .ok_or_else(|| SiteError::NotFound(format!("game {}", key)))?;
        *slot = game;
        Ok(())
    }

    pub fn delete_game(&mut self, key: &str) -> Result<Game> {
        self.data
            .games
            .shift_remove(key)
            .ok_or_else(|| SiteError::NotFound(format!("game {}", key)))
    }

    /// Adds a video in front of the list. Only the id is known from the URL,
    /// the remaining fields get placeholder values.
    pub fn add_video(
        &mut self,
        url: &str,
        custom_description: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<&Video> {
        let id = extract_video_id(url)
            .ok_or_else(|| SiteError::MalformedInput("Invalid YouTube URL".to_string()))?;

        if self.data.videos.iter().any(|video| video.id == id) {
            return Err(SiteError::Duplicate(format!("video {}", id)));
        }

        let description = custom_description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_VIDEO_DESCRIPTION);

        let video = Video {
            title: format!("Video {}", id),
            description: description.to_string(),
            thumbnail: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id),
            url: url.to_string(),
            published_at: now.to_rfc3339(),
            duration: "N/A".to_string(),
            views: "N/A".to_string(),
            view_count: 0,
            channel: "Unknown".to_string(),
            date_display: display_date(now.date_naive()),
            id,
        };

        info!("Adding video {}", video.id);
        self.data.videos.insert(0, video);
        Ok(&self.data.videos[0])
    }

    pub fn delete_video(&mut self, index: usize) -> Result<Video> {
        if index >= self.data.videos.len() {
            return Err(SiteError::NotFound(format!("video #{}", index)));
        }
        Ok(self.data.videos.remove(index))
    }

    pub fn add_developer(&mut self, developer: Developer) -> String {
        let base = TitleNormalizer::developer_slug(&developer.name);
        let key = TitleNormalizer::unique_id(&base, |candidate| {
            self.data.developers.contains_key(candidate)
        });
        info!("Adding developer {} as {}", developer.name, key);
        self.data.developers.insert(key.clone(), developer);
        key
    }

    pub fn edit_developer(&mut self, key: &str, developer: Developer) -> Result<()> {
        let slot = self
            .data
            .developers
            .get_mut(key)
            .ok_or_else(|| SiteError::NotFound(format!("developer {}", key)))?;
        *slot = developer;
        Ok(())
    }

    pub fn delete_developer(&mut self, key: &str) -> Result<Developer> {
        self.data
            .developers
            .shift_remove(key)
            .ok_or_else(|| SiteError::NotFound(format!("developer {}", key)))
    }

    /// Picks homepage entries in the order given, ignoring unknown keys and
    /// indexes, at most three of each. The selection is remembered as the
    /// current featured references.
    pub fn select_featured(
        &mut self,
        game_keys: &[String],
        video_indexes: &[usize],
        developer_keys: &[String],
    ) -> FeaturedPayload {
        let payload = FeaturedPayload {
            featured_games: game_keys
                .iter()
                .filter_map(|key| self.data.games.get(key).map(|game| (key.clone(), game.clone())))
                .take(FEATURED_LIMIT)
                .collect(),
            featured_showcases: video_indexes
                .iter()
                .filter_map(|index| self.data.videos.get(*index).cloned())
                .take(FEATURED_LIMIT)
                .collect(),
            featured_developers: developer_keys
                .iter()
                .filter_map(|key| {
                    self.data
                        .developers
                        .get(key)
                        .map(|developer| (key.clone(), developer.clone()))
                })
                .take(FEATURED_LIMIT)
                .collect(),
        };

        self.data.featured = FeaturedSelection {
            games: payload
                .featured_games
                .iter()
                .map(|(_, game)| FeaturedGame {
                    name: game.name.clone(),
                    game_id: game.game_id.clone(),
                })
                .collect(),
            showcases: payload
                .featured_showcases
                .iter()
                .map(|video| FeaturedShowcase {
                    url: video.url.clone(),
                    title: video.title.clone(),
                })
                .collect(),
            developers: payload
                .featured_developers
                .iter()
                .map(|(_, developer)| FeaturedDeveloper {
                    name: developer.name.clone(),
                })
                .collect(),
        };

        payload
    }

    /// Replaces the whole state with an exported document. The document must
    /// carry `games`, `videos` and `developers`.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(json.trim())
            .map_err(|_| SiteError::MalformedInput("Invalid JSON format".to_string()))?;

        let complete = ["games", "videos", "developers"]
            .iter()
            .all(|key| value.get(key).is_some_and(|v| !v.is_null()));
        if !complete {
            return Err(SiteError::MalformedInput(
                "Import must contain games, videos and developers".to_string(),
            ));
        }

        self.data = serde_json::from_value(value)
            .map_err(|err| SiteError::MalformedInput(err.to_string()))?;
        info!("Imported {} games", self.data.games.len());
        Ok(())
    }

    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    pub fn reset(&mut self) {
        self.data = SiteData::default();
    }
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("sitewright-data-{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameStatus;
    use chrono::TimeZone;

    fn game(name: &str) -> Game {
        Game {
            name: name.to_string(),
            game_id: format!("{}-id", name),
            ..Game::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()
    }

    #[test]
    fn same_name_games_get_suffixed_keys() {
        let mut state = AdminState::default();
        assert_eq!(state.add_game(game("Marvelous Playground")), "marvelous-playground");
        assert_eq!(state.add_game(game("Marvelous Playground")), "marvelous-playground-1");
        assert_eq!(state.add_game(game("Marvelous Playground")), "marvelous-playground-2");
        assert_eq!(state.stats().total_games, 3);
    }

    #[test]
    fn developer_keys_drop_the_at_sign() {
        let mut state = AdminState::default();
        let key = state.add_developer(Developer {
            name: "@Ghost".into(),
            ..Developer::default()
        });
        assert_eq!(key, "ghost");
        assert!(state.delete_developer("ghost").is_ok());
        assert!(matches!(
            state.delete_developer("ghost"),
            Err(SiteError::NotFound(_))
        ));
    }

    #[test]
    fn edit_and_delete_keep_order() {
        let mut state = AdminState::default();
        for name in ["A", "B", "C"] {
            state.add_game(game(name));
        }
        state
            .edit_game(
                "b",
                Game {
                    status: GameStatus::Patched,
                    ..game("B")
                },
            )
            .unwrap();
        state.delete_game("a").unwrap();

        let keys: Vec<&str> = state.data().games.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "c"]);
        assert_eq!(state.data().games["b"].status, GameStatus::Patched);
        assert!(state.edit_game("zzz", game("Z")).is_err());
    }

    #[test]
    fn new_video_goes_first_with_placeholders() {
        let mut state = AdminState::default();
        state
            .add_video("https://youtu.be/first", None, now())
            .unwrap();
        let video = state
            .add_video("https://www.youtube.com/watch?v=abc123", Some("Custom"), now())
            .unwrap();

        assert_eq!(video.id, "abc123");
        assert_eq!(video.title, "Video abc123");
        assert_eq!(video.description, "Custom");
        assert_eq!(video.views, "N/A");
        assert_eq!(video.date_display, "Mar 5, 2024");
        assert_eq!(state.data().videos[1].description, DEFAULT_VIDEO_DESCRIPTION);
    }

    #[test]
    fn rejected_videos() {
        let mut state = AdminState::default();
        state.add_video("https://youtu.be/abc", None, now()).unwrap();

        assert!(matches!(
            state.add_video("https://youtube.com/embed/abc", None, now()),
            Err(SiteError::Duplicate(_))
        ));
        assert!(matches!(
            state.add_video("https://vimeo.com/1", None, now()),
            Err(SiteError::MalformedInput(_))
        ));
        assert_eq!(state.data().videos.len(), 1);
        assert!(state.delete_video(3).is_err());
    }

    #[test]
    fn featured_selection_caps_at_three_in_selection_order() {
        let mut state = AdminState::default();
        let keys: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|name| state.add_game(game(name)))
            .collect();

        let picked = vec![
            keys[4].clone(),
            "missing".to_string(),
            keys[0].clone(),
            keys[2].clone(),
            keys[1].clone(),
        ];
        let payload = state.select_featured(&picked, &[7], &[]);

        let names: Vec<&str> = payload
            .featured_games
            .iter()
            .map(|(_, game)| game.name.as_str())
            .collect();
        assert_eq!(names, ["E", "A", "C"]);
        assert!(payload.featured_showcases.is_empty());
        assert_eq!(state.data().featured.games.len(), 3);
        assert_eq!(state.data().featured.games[0].game_id, "E-id");
    }

    #[test]
    fn import_requires_all_collections() {
        let mut state = AdminState::default();
        state.add_game(game("Kept"));

        assert!(matches!(
            state.import_json(r#"{"games":{},"videos":[]}"#),
            Err(SiteError::MalformedInput(_))
        ));
        assert!(matches!(
            state.import_json("not json"),
            Err(SiteError::MalformedInput(_))
        ));
        assert_eq!(state.stats().total_games, 1);

        state
            .import_json(r#"{"games":{"x":{"name":"X","status":"Working"}},"videos":[],"developers":{}}"#)
            .unwrap();
        assert_eq!(state.stats().working_games, 1);
    }

    #[test]
    fn export_then_import_restores_state() {
        let mut state = AdminState::default();
        state.add_game(game("Alpha"));
        state.add_video("https://youtu.be/xyz", None, now()).unwrap();
        let exported = state.export().unwrap();

        let mut restored = AdminState::default();
        restored.import_json(&exported).unwrap();
        assert_eq!(restored, state);

        restored.reset();
        assert_eq!(restored.data(), &SiteData::default());
        assert_eq!(export_file_name(now()), "sitewright-data-2024-03-05.json");
    }
}
