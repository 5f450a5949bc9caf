// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{activities, categories, home, neighborhoods, sitemap};
use crate::presentation::http::error;
use crate::presentation::http::middleware::rate_limit::page_rate_limit_layer;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Rate limiting keys on the client address, which requires serving with
/// `into_make_service_with_connect_info`. Tests driving the router through
/// `oneshot` disable it.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let pages = Router::new()
        .route("/", get(home::home_page))
        .route("/sport", get(categories::sport_page))
        .route("/intellectuel", get(categories::intellectual_page))
        .route("/quartier/{slug}", get(neighborhoods::neighborhood_page))
        .route("/activity/{id}", get(activities::activity_page_without_slug))
        .route("/activity/{id}/{slug}", get(activities::activity_page))
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/robots.txt", get(sitemap::robots_txt));

    let pages = if enable_rate_limiter {
        pages.layer(page_rate_limit_layer())
    } else {
        pages
    };

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .fallback(error::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
