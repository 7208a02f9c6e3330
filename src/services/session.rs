use crate::domain::messages::{
    IconResponse, UpdateDevelopers, UpdateGames, UpdateHomepage, UpdateResponse, UpdateShowcases,
};
use crate::domain::{DataCache, FeaturedPayload, SiteData};
use crate::error::Result;
use crate::infrastructure::AdminApiClient;
use crate::services::admin::AdminState;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the session's state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Server,
    Cache,
    Empty,
}

/// An admin's editing session: the working state, its local cache and the
/// API that publishes it.
pub struct AdminSession {
    pub state: AdminState,
    cache: Arc<dyn DataCache>,
    api: AdminApiClient,
}

impl AdminSession {
    /// Loads from the server and refreshes the cache, falling back to the
    /// cache when the server cannot be reached.
    pub async fn load(cache: Arc<dyn DataCache>, api: AdminApiClient) -> Result<(Self, DataSource)> {
        let (data, source) = match api.get_data().await {
            Ok(data) => {
                cache.save(&data)?;
                (data, DataSource::Server)
            }
            Err(err) => {
                warn!("Failed to load from server, using local data: {}", err);
                match cache.load()? {
                    Some(data) => (data, DataSource::Cache),
                    None => (SiteData::default(), DataSource::Empty),
                }
            }
        };

        let session = Self {
            state: AdminState::new(data),
            cache,
            api,
        };
        Ok((session, source))
    }

    /// Writes the cache, then publishes games, showcases and developers
    /// together. The first failure is returned; the cache keeps the changes.
    pub async fn save_all(&self) -> Result<Vec<UpdateResponse>> {
        let data = self.state.data();
        self.cache.save(data)?;

        let games = UpdateGames {
            games: data.games.clone(),
        };
        let showcases = UpdateShowcases {
            videos: data.videos.clone(),
        };
        let developers = UpdateDevelopers {
            developers: data.developers.clone(),
        };

        let responses = tokio::try_join!(
            self.api.update_games(&games),
            self.api.update_showcases(&showcases),
            self.api.update_developers(&developers),
        )?;

        info!("All changes saved to website");
        Ok(vec![responses.0, responses.1, responses.2])
    }

    pub async fn push_featured(&self, payload: &FeaturedPayload) -> Result<UpdateResponse> {
        self.cache.save(self.state.data())?;
        self.api.update_featured(payload).await
    }

    pub async fn sync_homepage(&self) -> Result<UpdateResponse> {
        let data = self.state.data();
        let body = UpdateHomepage {
            games: data.games.clone(),
            videos: data.videos.clone(),
            developers: data.developers.clone(),
        };
        self.api.update_homepage(&body).await
    }

    pub async fn set_icon(&self, icon_url: &str) -> Result<IconResponse> {
        self.api.update_icon(icon_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Game;
    use crate::infrastructure::FileSystemCache;
    use reqwest::Client;
    use tempfile::TempDir;

    fn unreachable_api() -> AdminApiClient {
        AdminApiClient::new(Client::new(), "http://127.0.0.1:9", "key".into())
    }

    #[tokio::test]
    async fn unreachable_server_falls_back_to_cache() {
        let dir = TempDir::new().unwrap();
        let cache = Arc::new(FileSystemCache::new(dir.path()));

        let mut cached = SiteData::default();
        cached.games.insert(
            "demo".into(),
            Game {
                name: "Demo".into(),
                ..Game::default()
            },
        );
        cache.save(&cached).unwrap();

        let (session, source) = AdminSession::load(cache, unreachable_api()).await.unwrap();
        assert_eq!(source, DataSource::Cache);
        assert_eq!(session.state.data(), &cached);
    }

    #[tokio::test]
    async fn failed_push_still_writes_the_cache() {
        let dir = TempDir::new().unwrap();
        let cache = Arc::new(FileSystemCache::new(dir.path()));

        let (mut session, source) = AdminSession::load(cache.clone(), unreachable_api())
            .await
            .unwrap();
        assert_eq!(source, DataSource::Empty);
        session.state.add_game(Game {
            name: "Fresh".into(),
            ..Game::default()
        });

        assert!(session.save_all().await.is_err());
        let stored = cache.load().unwrap().unwrap();
        assert!(stored.games.contains_key("fresh"));
    }
}
