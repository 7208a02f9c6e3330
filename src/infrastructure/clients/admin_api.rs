use crate::domain::messages::{
    ErrorBody, IconResponse, UpdateDevelopers, UpdateGames, UpdateHomepage, UpdateIcon,
    UpdateResponse, UpdateShowcases,
};
use crate::domain::{FeaturedPayload, SiteData};
use crate::error::{Result, SiteError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

/// Talks to a running `sitewright serve` instance on behalf of the admin CLI.
pub struct AdminApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AdminApiClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/api/{}", self.base_url, name)
    }

    async fn read<T: DeserializeOwned>(name: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        error!("Admin API {} failed: Status {}: {}", name, status, message);

        Err(SiteError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, name: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(self.endpoint(name))
            .header("X-API-Key", &self.api_key)
            .json(body)
            .send()
            .await?;
        Self::read(name, response).await
    }

    pub async fn get_data(&self) -> Result<SiteData> {
        let response = self
            .client
            .get(self.endpoint("get-data"))
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;
        let data: SiteData = Self::read("get-data", response).await?;
        info!(
            "Pulled {} games, {} videos, {} developers",
            data.games.len(),
            data.videos.len(),
            data.developers.len()
        );
        Ok(data)
    }

    pub async fn update_games(&self, body: &UpdateGames) -> Result<UpdateResponse> {
        self.post("update-games", body).await
    }

    pub async fn update_showcases(&self, body: &UpdateShowcases) -> Result<UpdateResponse> {
        self.post("update-showcases", body).await
    }

    pub async fn update_developers(&self, body: &UpdateDevelopers) -> Result<UpdateResponse> {
        self.post("update-developers", body).await
    }

    pub async fn update_homepage(&self, body: &UpdateHomepage) -> Result<UpdateResponse> {
        self.post("update-homepage", body).await
    }

    pub async fn update_featured(&self, body: &FeaturedPayload) -> Result<UpdateResponse> {
        self.post("update-featured", body).await
    }

    pub async fn update_icon(&self, icon_url: &str) -> Result<IconResponse> {
        let body = UpdateIcon {
            icon_url: icon_url.to_string(),
        };
        self.post("update-icon", &body).await
    }
}
