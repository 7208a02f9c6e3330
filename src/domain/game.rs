use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability shown on a game card badge. Unknown labels survive verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    #[default]
    Working,
    Updating,
    Patched,
    Other(String),
}

impl GameStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GameStatus::Working => "Working",
            GameStatus::Updating => "Updating",
            GameStatus::Patched => "Patched",
            GameStatus::Other(label) => label,
        }
    }

    /// Lower-cased label, used for the `status-*` CSS class and `data-status`.
    pub fn css_key(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl From<String> for GameStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Working" => GameStatus::Working,
            "Updating" => GameStatus::Updating,
            "Patched" => GameStatus::Patched,
            _ => GameStatus::Other(label),
        }
    }
}

impl From<&str> for GameStatus {
    fn from(label: &str) -> Self {
        GameStatus::from(label.to_string())
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub game_id: String,
    /// Only carried in admin data; the HTML listing never renders it.
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub date_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keeps_unknown_labels() {
        let status: GameStatus = serde_json::from_str("\"Maintenance\"").unwrap();
        assert_eq!(status, GameStatus::Other("Maintenance".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Maintenance\"");
        assert_eq!(GameStatus::Updating.css_key(), "updating");
    }

    #[test]
    fn game_uses_admin_field_names() {
        let game: Game = serde_json::from_str(
            r#"{"name":"Demo","thumbnail":"t.png","description":"d","status":"Patched","gameId":"42"}"#,
        )
        .unwrap();
        assert_eq!(game.game_id, "42");
        assert_eq!(game.status, GameStatus::Patched);
        assert!(game.features.is_empty());

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["gameId"], "42");
    }
}
