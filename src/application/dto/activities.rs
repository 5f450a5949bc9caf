use crate::domain::activity::Activity;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDto {
    pub id: i64,
    pub name: String,
    /// URL segment derived from `name`.
    pub slug: String,
    /// Canonical site-relative path, `/activity/{id}/{slug}`.
    pub path: String,
    pub category: &'static str,
    pub subcategory: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub neighborhood: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ActivityDto {
    pub fn new(activity: Activity, slug: String) -> Self {
        let id = i64::from(activity.id);
        Self {
            id,
            path: activity_path(id, &slug),
            slug,
            name: activity.name.into_inner(),
            category: activity.category.as_str(),
            subcategory: activity.subcategory.filter(|s| !s.is_empty()),
            address: activity.address,
            phone: activity.phone,
            website: activity.website,
            latitude: activity.coordinates.map(|c| c.latitude),
            longitude: activity.coordinates.map(|c| c.longitude),
            neighborhood: activity.neighborhood,
            updated_at: activity.updated_at,
        }
    }
}

/// `/activity/{id}/{slug}`, or `/activity/{id}` when the name yields no slug.
pub fn activity_path(id: i64, slug: &str) -> String {
    if slug.is_empty() {
        format!("/activity/{id}")
    } else {
        format!("/activity/{id}/{slug}")
    }
}
