// src/presentation/http/controllers/activities.rs
use crate::application::{
    dto::ActivityDto,
    error::ApplicationError,
    queries::activities::GetActivityByIdQuery,
};
use crate::domain::activity::{Category, FALLBACK_SUBCATEGORY};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::seo::{self, Layout, PageMeta};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{ActivityTemplate, Breadcrumb};
use axum::{
    Extension,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::{Value, json};

pub async fn activity_page(
    Extension(state): Extension<HttpState>,
    Path((id, slug)): Path<(String, String)>,
) -> HttpResult<Response> {
    render_or_redirect(&state, &id, &slug).await
}

pub async fn activity_page_without_slug(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    render_or_redirect(&state, &id, "").await
}

/// Renders the page when the requested path is canonical, otherwise redirects to it.
///
/// The id segment must also be canonical: `007` or `+7` redirect to `7`.
async fn render_or_redirect(
    state: &HttpState,
    raw_id: &str,
    requested_slug: &str,
) -> HttpResult<Response> {
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("activity not found")))?;

    let activity = state
        .services
        .activity_queries
        .get_activity_by_id(GetActivityByIdQuery { id })
        .await
        .into_http()?;

    if activity.slug != requested_slug || activity.id.to_string() != raw_id {
        tracing::debug!(
            raw_id,
            requested_slug,
            canonical = %activity.path,
            "redirecting to canonical activity path"
        );
        return Ok(Redirect::permanent(&activity.path).into_response());
    }

    let url = state.site.absolute_url(&activity.path);
    let category = activity.category.parse::<Category>().map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
    })?;
    let subcategory_label = activity
        .subcategory
        .clone()
        .unwrap_or_else(|| FALLBACK_SUBCATEGORY.to_string());

    let meta = PageMeta::new(
        format!("{} - {subcategory_label} à Toulouse", activity.name),
        format!(
            "{} : {subcategory_label} à Toulouse. Adresse, téléphone et site web du club.",
            activity.name
        ),
        url.clone(),
    );

    Ok(ActivityTemplate {
        layout: Layout::new(&state.site, meta),
        breadcrumbs: vec![
            Breadcrumb::link(category.label(), format!("/{}", category.route_segment())),
            Breadcrumb::current(activity.name.clone()),
        ],
        business_json_ld: seo::script_json(&local_business(&activity, &url)),
        subcategory_label,
        activity,
    }
    .into_response())
}

fn local_business(activity: &ActivityDto, url: &str) -> Value {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": activity.name,
        "url": url,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": activity.address,
            "addressLocality": "Toulouse",
            "addressCountry": "FR",
        },
    });

    if let Some(phone) = &activity.phone {
        value["telephone"] = json!(phone);
    }
    if let Some(website) = &activity.website {
        value["sameAs"] = json!(website);
    }
    if let (Some(latitude), Some(longitude)) = (activity.latitude, activity.longitude) {
        value["geo"] = json!({
            "@type": "GeoCoordinates",
            "latitude": latitude,
            "longitude": longitude,
        });
    }

    value
}
