// src/presentation/http/seo.rs
//! Page metadata and schema.org structured data embedded in rendered pages.

use crate::config::SiteConfig;
use serde_json::{Value, json};

pub const SITE_NAME: &str = "ActivityAround";

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "activités Toulouse",
    "clubs Toulouse",
    "associations Toulouse",
    "sport Toulouse",
    "échecs Toulouse",
    "arts martiaux Toulouse",
    "loisirs Toulouse",
];

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            canonical_url: canonical_url.into(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Data shared by every page through the base template.
#[derive(Debug, Clone)]
pub struct Layout {
    pub meta: PageMeta,
    pub organization_json_ld: String,
    pub google_site_verification: Option<String>,
}

impl Layout {
    pub fn new(site: &SiteConfig, meta: PageMeta) -> Self {
        Self {
            meta,
            organization_json_ld: script_json(&organization(site)),
            google_site_verification: site.google_site_verification().map(str::to_owned),
        }
    }
}

pub fn organization(site: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": site.base_url(),
        "description": "Annuaire des activités sportives et intellectuelles à Toulouse",
        "areaServed": {
            "@type": "City",
            "name": "Toulouse",
        },
    })
}

pub fn collection_page(name: &str, description: &str, url: &str, number_of_items: usize) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": name,
        "description": description,
        "url": url,
        "numberOfItems": number_of_items,
    })
}

/// Serializes `value` for a `<script type="application/ld+json">` body.
///
/// `</` is escaped so text fields cannot close the script element.
pub fn script_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_default()
        .replace("</", "<\\/")
}
