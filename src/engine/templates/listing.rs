//! Full listing cards for the games, showcases and developers pages.
//!
//! Each card is laid out exactly as the matching scraper expects to read it
//! back, so any change here must be mirrored in `engine::scrapers`.

use crate::domain::{Developer, Game, Video};

const CARD_SEPARATOR: &str = "\n\n";

pub fn games_listing<'a>(games: impl IntoIterator<Item = (&'a String, &'a Game)>) -> String {
    games
        .into_iter()
        .map(|(key, game)| game_card(key, game))
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

fn game_card(key: &str, game: &Game) -> String {
    let status_key = game.status.css_key();
    format!(
        r#"        <div class="game-card reveal delay-1" data-game-id="{key}" data-status="{status_key}" onclick="openGameModal('{key}')">
          <img src="{thumbnail}" alt="{name}" class="game-thumbnail">
          <div class="game-content">
            <h3 class="game-name">{name}</h3>
            <p class="game-description">{description}</p>
            <div class="game-status">
              <span class="status-badge status-{status_key}">{status}</span>
              <span class="game-id"># {game_id}</span>
            </div>
          </div>
        </div>"#,
        key = key,
        status_key = status_key,
        thumbnail = game.thumbnail,
        name = game.name,
        description = game.description,
        status = game.status,
        game_id = game.game_id,
    )
}

pub fn videos_listing<'a>(videos: impl IntoIterator<Item = &'a Video>) -> String {
    videos
        .into_iter()
        .enumerate()
        .map(|(index, video)| video_card(index, video))
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

fn video_card(index: usize, video: &Video) -> String {
    format!(
        r#"        <div class="video-card reveal delay-{delay}" data-date="{published_at}" onclick="openVideo('{url}')">
          <div class="video-thumbnail-container">
            <img src="{thumbnail}" alt="{title}" class="video-thumbnail">
            <div class="play-overlay">
              <div class="play-button">▶</div>
            </div>
            <div class="video-duration">{duration}</div>
          </div>
          <div class="video-content">
            <h3 class="video-title">{title}</h3>
            <p class="video-description">{description}</p>
            <div class="video-meta">
              <div class="video-date">
                <span>📅</span>
                <span>{date_display}</span>
              </div>
              <div class="video-views">{views}</div>
            </div>
            <div class="video-channel">{channel}</div>
          </div>
        </div>"#,
        delay = index % 6 + 1,
        published_at = video.published_at,
        url = video.url,
        thumbnail = video.thumbnail,
        title = video.title,
        duration = video.duration,
        description = video.description,
        date_display = video.date_display,
        views = video.views,
        channel = video.channel,
    )
}

pub fn developers_listing<'a>(
    developers: impl IntoIterator<Item = (&'a String, &'a Developer)>,
) -> String {
    developers
        .into_iter()
        .map(|(_, developer)| developer_card(developer))
        .collect::<Vec<_>>()
        .join(CARD_SEPARATOR)
}

fn developer_card(developer: &Developer) -> String {
    let skills = developer
        .skills
        .iter()
        .map(|skill| format!(r#"<span class="skill-tag">{}</span>"#, skill))
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"        <div class="dev-card scroll-reveal">
          <div class="dev-avatar">
            <img src="{avatar}" alt="{name}">
          </div>
          <h3 class="dev-name">{name}</h3>
          <div class="dev-role">{role}</div>
          <p class="dev-description">
            {description}
          </p>
          <div class="skill-tags">
            {skills}
          </div>
          <div class="dev-stats">
            <div class="stat">
              <span class="stat-number">Pro</span>
              <span class="stat-label">Level</span>
            </div>
            <div class="stat">
              <span class="stat-number">100%</span>
              <span class="stat-label">Quality</span>
            </div>
            <div class="stat">
              <span class="stat-number">∞</span>
              <span class="stat-label">Skills</span>
            </div>
          </div>
        </div>"#,
        avatar = developer.avatar,
        name = developer.name,
        role = developer.role,
        description = developer.description,
        skills = skills,
    )
}
