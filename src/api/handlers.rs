//! Handlers for the admin API.
//!
//! Every update reads the page, rewrites its section and writes it back in
//! one request. Bodies that fail to parse are answered with 400.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::domain::messages::{
    IconResponse, UpdateDevelopers, UpdateGames, UpdateHomepage, UpdateIcon, UpdateResponse,
    UpdateShowcases,
};
use crate::domain::{FeaturedPayload, SiteData};
use crate::error::{Result, SiteError};
use crate::services::site::UpdateOutcome;

fn respond(outcome: UpdateOutcome) -> Json<UpdateResponse> {
    Json(UpdateResponse {
        success: true,
        message: outcome.message,
        unanchored_sections: outcome.unanchored_sections,
    })
}

/// GET /api/get-data
pub async fn get_data(State(state): State<AppState>) -> Result<Json<SiteData>> {
    Ok(Json(state.site.current_data().await?))
}

/// POST /api/update-games
pub async fn update_games(
    State(state): State<AppState>,
    body: std::result::Result<Json<UpdateGames>, JsonRejection>,
) -> Result<Json<UpdateResponse>> {
    let Json(body) = body?;
    tracing::info!(games = body.games.len(), "Updating games page");
    Ok(respond(state.site.update_games(&body.games).await?))
}

/// POST /api/update-showcases
pub async fn update_showcases(
    State(state): State<AppState>,
    body: std::result::Result<Json<UpdateShowcases>, JsonRejection>,
) -> Result<Json<UpdateResponse>> {
    let Json(body) = body?;
    tracing::info!(videos = body.videos.len(), "Updating showcases page");
    Ok(respond(state.site.update_showcases(&body.videos).await?))
}

/// POST /api/update-developers
pub async fn update_developers(
    State(state): State<AppState>,
    body: std::result::Result<Json<UpdateDevelopers>, JsonRejection>,
) -> Result<Json<UpdateResponse>> {
    let Json(body) = body?;
    tracing::info!(developers = body.developers.len(), "Updating developers page");
    Ok(respond(state.site.update_developers(&body.developers).await?))
}

/// POST /api/update-homepage
pub async fn update_homepage(
    State(state): State<AppState>,
    body: std::result::Result<Json<UpdateHomepage>, JsonRejection>,
) -> Result<Json<UpdateResponse>> {
    let Json(body) = body?;
    let outcome = state
        .site
        .update_homepage(&body.games, &body.videos, &body.developers)
        .await?;
    Ok(respond(outcome))
}

/// POST /api/update-featured
pub async fn update_featured(
    State(state): State<AppState>,
    body: std::result::Result<Json<FeaturedPayload>, JsonRejection>,
) -> Result<Json<UpdateResponse>> {
    let Json(body) = body?;
    Ok(respond(state.site.update_featured(body).await?))
}

/// POST /api/update-icon
pub async fn update_icon(
    State(state): State<AppState>,
    body: std::result::Result<Json<UpdateIcon>, JsonRejection>,
) -> Result<Json<IconResponse>> {
    let Json(body) = body?;
    let outcome = state.site.update_icon(&body.icon_url).await?;

    Ok(Json(IconResponse {
        success: true,
        message: outcome.message,
        updated_files: outcome.updated_files,
    }))
}

pub async fn not_found() -> SiteError {
    SiteError::NotFound(String::new())
}
