use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;

/// Which page holds which editable section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteLayout {
    pub games_page: String,
    pub showcases_page: String,
    pub developers_page: String,
    pub homepage: String,
    /// Pages whose favicon follows the site icon.
    pub icon_pages: Vec<String>,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            games_page: "games/index.html".to_string(),
            showcases_page: "showcases/index.html".to_string(),
            developers_page: "developers/index.html".to_string(),
            homepage: "index.html".to_string(),
            icon_pages: [
                "index.html",
                "games/index.html",
                "showcases/index.html",
                "developers/index.html",
                "executors/index.html",
                "pricing/index.html",
                "tos/index.html",
            ]
            .iter()
            .map(|page| page.to_string())
            .collect(),
        }
    }
}

impl SiteLayout {
    /// Reads the layout file, or the built-in layout when there is none.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        info!("Loading site layout from {:?}", path);
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

pub struct Config {
    pub args: Args,
    pub layout: SiteLayout,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        let layout = SiteLayout::load(&args.layout_file)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("sitewright/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            layout,
            http_client,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.cache_dir.exists() {
            std::fs::create_dir_all(&self.args.cache_dir)?;
        }

        info!("Cache dir exists");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_layout_file_uses_site_defaults() {
        let layout = SiteLayout::load(Path::new("definitely/not/here.json")).unwrap();
        assert_eq!(layout, SiteLayout::default());
        assert_eq!(layout.icon_pages.len(), 7);
    }

    #[test]
    fn partial_layout_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site_layout.json");
        std::fs::write(&path, r#"{"homepage":"home.html","icon_pages":["home.html"]}"#).unwrap();

        let layout = SiteLayout::load(&path).unwrap();
        assert_eq!(layout.homepage, "home.html");
        assert_eq!(layout.icon_pages, ["home.html"]);
        assert_eq!(layout.games_page, "games/index.html");
    }
}
