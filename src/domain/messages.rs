//! Bodies exchanged between the admin client and the HTTP API.

use super::{DeveloperMap, GameMap, Video};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGames {
    #[serde(default)]
    pub games: GameMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShowcases {
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDevelopers {
    #[serde(default)]
    pub developers: DeveloperMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHomepage {
    #[serde(default)]
    pub games: GameMap,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub developers: DeveloperMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIcon {
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
    /// Sections whose anchor was missing, so the page was left as it was.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unanchored_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub updated_files: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
