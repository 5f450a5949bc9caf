use super::{
    SitemapQueryService,
    routes::{
        ACTIVITY_CHANGE_FREQUENCY, ACTIVITY_PRIORITY, BLOG_ROUTES, CATEGORY_CHANGE_FREQUENCY,
        CATEGORY_PRIORITY, CITY_CHANGE_FREQUENCY, CITY_PRIORITY, STATIC_ROUTES, StaticRoute,
    },
};
use crate::{
    application::{
        dto::{SitemapEntry, activity_path},
        error::ApplicationResult,
    },
    domain::{activity::Category, reference::CITIES},
};
use chrono::{DateTime, Utc};

impl SitemapQueryService {
    /// Builds the full URL list. Fails as a whole when the store is unreachable.
    ///
    /// Order: static pages, categories, cities, blog, then one entry per
    /// activity. Two activities whose names share a slug still get distinct
    /// URLs through their ids; no deduplication happens here.
    pub async fn generate_sitemap(&self) -> ApplicationResult<Vec<SitemapEntry>> {
        let summaries = self.read_repo.list_summaries().await?;
        let now = self.clock.now();

        let mut entries = Vec::with_capacity(
            STATIC_ROUTES.len()
                + Category::ALL.len()
                + CITIES.len()
                + BLOG_ROUTES.len()
                + summaries.len(),
        );

        entries.extend(STATIC_ROUTES.iter().map(|r| self.static_entry(r, now)));
        entries.extend(Category::ALL.iter().map(|category| {
            SitemapEntry::new(
                self.absolute(&format!("/{}", category.route_segment())),
                now,
                CATEGORY_CHANGE_FREQUENCY,
                CATEGORY_PRIORITY,
            )
        }));
        entries.extend(CITIES.iter().map(|city| {
            SitemapEntry::new(
                self.absolute(&format!("/ville/{}", city.slug)),
                now,
                CITY_CHANGE_FREQUENCY,
                CITY_PRIORITY,
            )
        }));
        entries.extend(BLOG_ROUTES.iter().map(|r| self.static_entry(r, now)));
        entries.extend(summaries.into_iter().map(|summary| {
            let slug = self.slugger.slugify(summary.name.as_str());
            SitemapEntry::new(
                self.absolute(&activity_path(summary.id.into(), &slug)),
                summary.updated_at,
                ACTIVITY_CHANGE_FREQUENCY,
                ACTIVITY_PRIORITY,
            )
        }));

        tracing::debug!(entries = entries.len(), "sitemap generated");
        Ok(entries)
    }

    fn static_entry(&self, route: &StaticRoute, now: DateTime<Utc>) -> SitemapEntry {
        SitemapEntry::new(
            self.absolute(route.path),
            now,
            route.change_frequency,
            route.priority,
        )
    }
}
