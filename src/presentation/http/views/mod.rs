// src/presentation/http/views/mod.rs
//! Askama templates. Page templates extend `base.html`, which reads `layout`.

use askama::Template;
use askama_web::WebTemplate;

use crate::application::dto::{
    ActivityDto, CategoryListingDto, NeighborhoodListingDto, NeighborhoodRef, SitemapEntry,
};
use crate::presentation::http::seo::Layout;

pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

pub struct CategoryLink {
    pub href: String,
    pub label: &'static str,
    pub blurb: &'static str,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub categories: Vec<CategoryLink>,
    pub neighborhoods: Vec<NeighborhoodRef>,
}

#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub layout: Layout,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub heading: &'static str,
    pub subtitle: String,
    pub nav_heading: &'static str,
    pub listing: CategoryListingDto,
    pub collection_json_ld: String,
    pub seo_heading: &'static str,
    pub seo_paragraphs: Vec<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "neighborhood.html")]
pub struct NeighborhoodTemplate {
    pub layout: Layout,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub subtitle: String,
    pub listing: NeighborhoodListingDto,
    pub collection_json_ld: String,
    pub seo_paragraphs: Vec<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "activity.html")]
pub struct ActivityTemplate {
    pub layout: Layout,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub activity: ActivityDto,
    pub subcategory_label: String,
    pub business_json_ld: String,
}

/// Standalone page: rendered from error paths that have no site context.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub heading: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml", escape = "html")]
pub struct SitemapTemplate {
    pub entries: Vec<SitemapEntry>,
}

/// `1 activité`, `3 activités`.
pub fn count_activities(count: usize) -> String {
    if count > 1 {
        format!("{count} activités")
    } else {
        format!("{count} activité")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ChangeFrequency;
    use chrono::{TimeZone, Utc};

    #[test]
    fn french_plural_starts_at_two() {
        assert_eq!(count_activities(0), "0 activité");
        assert_eq!(count_activities(1), "1 activité");
        assert_eq!(count_activities(2), "2 activités");
    }

    #[test]
    fn sitemap_renders_urlset() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let template = SitemapTemplate {
            entries: vec![SitemapEntry::new(
                "https://example.org/activity/1/judo?x=1&y=2".into(),
                at,
                ChangeFrequency::Weekly,
                0.8,
            )],
        };
        let xml = template.render().unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<lastmod>2024-05-01T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("x=1&y=2"), "ampersands must be escaped");
    }
}
