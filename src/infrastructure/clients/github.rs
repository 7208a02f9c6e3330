use crate::domain::{Document, DocumentStore, Revision};
use crate::error::{Result, SiteError};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

pub const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "sitewright-admin";

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct UpdateContentsRequest<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
    branch: &'a str,
}

/// Site pages stored in a GitHub repository, read and written through the
/// contents API. The blob `sha` doubles as the revision token.
pub struct GithubStore {
    client: Client,
    api_base_url: String,
    token: String,
    repo: String,
    branch: String,
}

impl GithubStore {
    pub fn new(client: Client, token: String, repo: String, branch: String) -> Self {
        Self::with_api_url(client, GITHUB_API_URL, token, repo, branch)
    }

    pub fn with_api_url(
        client: Client,
        api_base_url: impl Into<String>,
        token: String,
        repo: String,
        branch: String,
    ) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            token,
            repo,
            branch,
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_base_url,
            self.repo,
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
    }

    async fn upstream_error(path: &str, response: Response) -> SiteError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!("GitHub API error for {}: Status {}", path, status);

        match status {
            StatusCode::NOT_FOUND => SiteError::NotFound(path.to_string()),
            StatusCode::CONFLICT => SiteError::Conflict(format!("{} was updated concurrently", path)),
            _ => SiteError::Upstream {
                status: status.as_u16(),
                message: format!("{}: {}", path, body),
            },
        }
    }
}

/// The contents API wraps base64 payloads at 60 columns.
pub(crate) fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

#[async_trait]
impl DocumentStore for GithubStore {
    async fn fetch_document(&self, path: &str) -> Result<Document> {
        let response = self
            .authorized(self.client.get(self.contents_url(path)))
            .query(&[("ref", self.branch.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(path, response).await);
        }

        let contents: ContentsResponse = response.json().await?;
        info!("Fetched {} at {}", path, contents.sha);

        Ok(Document {
            path: path.to_string(),
            content: decode_content(&contents.content)?,
            revision: Revision::new(contents.sha),
        })
    }

    async fn write_document(
        &self,
        path: &str,
        content: &str,
        expected: &Revision,
        message: &str,
    ) -> Result<()> {
        let body = UpdateContentsRequest {
            message,
            content: BASE64.encode(content.as_bytes()),
            sha: expected.as_str(),
            branch: &self.branch,
        };

        let response = self
            .authorized(self.client.put(self.contents_url(path)))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(path, response).await);
        }

        info!("Committed {}: {}", path, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_utf8_content() {
        let html = "<h3 class=\"game-name\">Café 🎮</h3>\n";
        let encoded = BASE64.encode(html);
        let wrapped = encoded
            .as_bytes()
            .chunks(10)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(decode_content(&wrapped).unwrap(), html);
    }

    #[test]
    fn invalid_payload_is_a_decode_error() {
        assert!(matches!(decode_content("!!!"), Err(SiteError::Decode(_))));
    }

    #[test]
    fn contents_url_joins_repo_and_path() {
        let store = GithubStore::with_api_url(
            Client::new(),
            "http://localhost:9000/",
            "t".into(),
            "acme/site".into(),
            "main".into(),
        );
        assert_eq!(
            store.contents_url("/games/index.html"),
            "http://localhost:9000/repos/acme/site/contents/games/index.html"
        );
    }
}
