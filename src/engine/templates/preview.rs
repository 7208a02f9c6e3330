use crate::domain::{Developer, Game, Video, FEATURED_LIMIT};
use crate::services::text_utils::TitleNormalizer;

const DESCRIPTION_BUDGET: usize = 100;
const TITLE_BUDGET: usize = 40;

/// Placeholder shown in the showcase row while nothing is featured.
pub const COMING_SOON: &str = r#"        <div class="coming-soon">
          <div class="pulse-text reveal">🎬 Coming Soon!</div>
          <p class="muted reveal">Awesome showcase videos are on their way.</p>
          <div class="loader">
            <div class="loader-dot"></div>
            <div class="loader-dot"></div>
            <div class="loader-dot"></div>
          </div>
        </div>"#;

pub fn game_previews<'a>(games: impl IntoIterator<Item = &'a Game>) -> String {
    games
        .into_iter()
        .take(FEATURED_LIMIT)
        .enumerate()
        .map(|(index, game)| {
            format!(
                r#"        <div class="game-card reveal delay-{delay}" onclick="window.location.href='/games'">
          <img src="{thumbnail}" alt="{name}" class="game-image">
          <div class="game-content">
            <h3>{name}</h3>
            <p>{description}</p>
            <div class="game-id"># {game_id}</div>
          </div>
        </div>"#,
                delay = index + 1,
                thumbnail = game.thumbnail,
                name = game.name,
                description = TitleNormalizer::truncate(&game.description, DESCRIPTION_BUDGET),
                game_id = game.game_id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn showcase_previews<'a>(videos: impl IntoIterator<Item = &'a Video>) -> String {
    videos
        .into_iter()
        .take(FEATURED_LIMIT)
        .enumerate()
        .map(|(index, video)| {
            format!(
                r#"        <div class="showcase-card reveal delay-{delay}" onclick="window.open('{url}', '_blank')">
          <div class="showcase-thumbnail">
            <img src="{thumbnail}" alt="{alt}" style="width: 100%; height: 100%; object-fit: cover;">
          </div>
          <div class="showcase-content">
            <h3 class="showcase-title">{title}</h3>
            <p class="showcase-views">{views}</p>
          </div>
        </div>"#,
                delay = index + 1,
                url = video.url,
                thumbnail = video.thumbnail,
                alt = video.title,
                title = TitleNormalizer::truncate(&video.title, TITLE_BUDGET),
                views = video.views,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn developer_previews<'a>(developers: impl IntoIterator<Item = &'a Developer>) -> String {
    developers
        .into_iter()
        .take(FEATURED_LIMIT)
        .enumerate()
        .map(|(index, developer)| {
            format!(
                r#"        <div class="dev-card-mini reveal delay-{delay}" onclick="window.location.href='/developers'">
          <div class="dev-avatar-mini">
            <img src="{avatar}" alt="{name}">
          </div>
          <h3 class="dev-name-mini">{name}</h3>
          <p class="dev-role-mini">{role}</p>
        </div>"#,
                delay = index + 1,
                avatar = developer.avatar,
                name = developer.name,
                role = developer.role,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_preview_truncates_long_descriptions() {
        let games = vec![
            Game {
                name: "Long".into(),
                description: "x".repeat(120),
                ..Game::default()
            },
            Game {
                name: "Short".into(),
                description: "fits".into(),
                ..Game::default()
            },
        ];
        let html = game_previews(&games);
        assert!(html.contains(&format!("<p>{}...</p>", "x".repeat(100))));
        assert!(html.contains("<p>fits</p>"));
        assert!(html.contains("reveal delay-2"));
    }

    #[test]
    fn previews_stop_at_three_cards() {
        let videos: Vec<Video> = (0..5)
            .map(|i| Video {
                title: format!("Clip {}", i),
                ..Video::default()
            })
            .collect();
        let html = showcase_previews(&videos);
        assert_eq!(html.matches("showcase-card").count(), 3);
        assert!(!html.contains("Clip 3"));
        assert!(!html.contains("delay-4"));
    }

    #[test]
    fn showcase_title_budget_is_forty_characters() {
        let title = "A".repeat(41);
        let videos = vec![Video {
            title: title.clone(),
            ..Video::default()
        }];
        let html = showcase_previews(&videos);
        assert!(html.contains(&format!(
            r#"<h3 class="showcase-title">{}...</h3>"#,
            "A".repeat(40)
        )));
        assert!(html.contains(&format!(r#"alt="{}""#, title)));
    }
}
