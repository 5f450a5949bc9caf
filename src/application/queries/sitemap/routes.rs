// src/application/queries/sitemap/routes.rs
use crate::application::dto::ChangeFrequency;

/// Site-relative path with its fixed sitemap hints.
#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const fn route(path: &'static str, change_frequency: ChangeFrequency, priority: f32) -> StaticRoute {
    StaticRoute {
        path,
        change_frequency,
        priority,
    }
}

/// Homepage and informational pages. An empty path is the bare base URL.
pub const STATIC_ROUTES: &[StaticRoute] = &[
    route("", ChangeFrequency::Daily, 1.0),
    route("/activites", ChangeFrequency::Daily, 0.9),
    route("/faq", ChangeFrequency::Monthly, 0.5),
];

pub const BLOG_ROUTES: &[StaticRoute] = &[
    route("/blog", ChangeFrequency::Weekly, 0.7),
    route("/blog/top-10-clubs-echecs-toulouse", ChangeFrequency::Monthly, 0.6),
    route("/blog/guide-debutant-arts-martiaux-toulouse", ChangeFrequency::Monthly, 0.6),
    route("/blog/meilleurs-quartiers-sport-toulouse", ChangeFrequency::Monthly, 0.6),
    route("/blog/activites-intellectuelles-toulouse", ChangeFrequency::Monthly, 0.6),
];

pub const CATEGORY_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Daily;
pub const CATEGORY_PRIORITY: f32 = 0.9;

pub const CITY_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
pub const CITY_PRIORITY: f32 = 0.8;

pub const ACTIVITY_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
pub const ACTIVITY_PRIORITY: f32 = 0.8;
