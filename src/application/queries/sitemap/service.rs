use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::activity::ActivityReadRepository;

pub struct SitemapQueryService {
    pub(super) read_repo: Arc<dyn ActivityReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    /// Absolute origin without trailing slash.
    pub(super) base_url: String,
}

impl SitemapQueryService {
    pub fn new(
        read_repo: Arc<dyn ActivityReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            read_repo,
            slugger,
            clock,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(super) fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
