// src/presentation/http/controllers/sitemap.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::SitemapTemplate;
use askama::Template;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};
use std::time::SystemTime;

pub async fn sitemap_xml(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let entries = state
        .services
        .sitemap_queries
        .generate_sitemap()
        .await
        .into_http()?;

    let last_modified = entries.iter().map(|e| e.last_modified).max();
    let body = SitemapTemplate { entries }.render().map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(format!(
            "sitemap rendering failed: {err}"
        )))
    })?;

    let cache_control = format!(
        "public, max-age={}",
        state.site.sitemap_max_age().as_secs()
    );
    let mut response = (
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8".to_string()),
            (header::CACHE_CONTROL, cache_control),
        ],
        body,
    )
        .into_response();

    if let Some(at) = last_modified {
        let value = httpdate::fmt_http_date(SystemTime::from(at));
        if let Ok(value) = value.parse() {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
    }

    Ok(response)
}

pub async fn robots_txt(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    let body = format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        state.site.absolute_url("/sitemap.xml")
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
