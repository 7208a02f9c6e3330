//! HTTP surface of the admin backend.

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::site::SiteService;

pub mod auth;
pub mod handlers;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteService>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(site: SiteService, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            site: Arc::new(site),
            api_key: api_key.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/get-data", get(handlers::get_data))
        .route("/api/update-games", post(handlers::update_games))
        .route("/api/update-showcases", post(handlers::update_showcases))
        .route("/api/update-developers", post(handlers::update_developers))
        .route("/api/update-homepage", post(handlers::update_homepage))
        .route("/api/update-featured", post(handlers::update_featured))
        .route("/api/update-icon", post(handlers::update_icon))
        .method_not_allowed_fallback(handlers::not_found)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer())
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::require_api_key,
                )),
        )
        .with_state(state)
}

pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(auth::API_KEY_HEADER),
        ])
}
