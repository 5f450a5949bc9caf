// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::sample_activities;
use super::mocks::{FixedClock, InMemoryActivityRepo};
use activity_around::application::ports::{time::Clock, util::SlugGenerator};
use activity_around::application::services::ApplicationServices;
use activity_around::config::SiteConfig;
use activity_around::domain::activity::ActivityReadRepository;
use activity_around::infrastructure::util::DefaultSlugGenerator;
use activity_around::presentation::http::{routes, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, header};
use axum::response::Response;
use tower::util::ServiceExt as _;

pub const TEST_BASE_URL: &str = "https://example.org";

pub fn build_services(repo: Arc<dyn ActivityReadRepository>) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());
    ApplicationServices::new(repo, clock, slugger, TEST_BASE_URL)
}

pub fn build_test_state(repo: Arc<dyn ActivityReadRepository>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(repo)),
        site: Arc::new(SiteConfig::new(TEST_BASE_URL)),
    }
}

/// Router over [`sample_activities`], rate limiting disabled.
pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryActivityRepo::with_items(sample_activities())))
}

pub fn make_test_router_with_repo(repo: Arc<dyn ActivityReadRepository>) -> axum::Router {
    routes::build_router_with_rate_limiter(build_test_state(repo), false)
}

pub async fn get(app: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn header_str<'a>(resp: &'a Response, name: header::HeaderName) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
