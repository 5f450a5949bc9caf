// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{time::Clock, util::SlugGenerator},
        queries::{activities::ActivityQueryService, sitemap::SitemapQueryService},
    },
    domain::activity::ActivityReadRepository,
};

pub struct ApplicationServices {
    pub activity_queries: Arc<ActivityQueryService>,
    pub sitemap_queries: Arc<SitemapQueryService>,
}

impl ApplicationServices {
    pub fn new(
        activity_read_repo: Arc<dyn ActivityReadRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let activity_queries = Arc::new(ActivityQueryService::new(
            Arc::clone(&activity_read_repo),
            Arc::clone(&slugger),
        ));

        let sitemap_queries = Arc::new(SitemapQueryService::new(
            Arc::clone(&activity_read_repo),
            slugger,
            clock,
            base_url,
        ));

        Self {
            activity_queries,
            sitemap_queries,
        }
    }
}
