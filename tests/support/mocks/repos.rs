// tests/support/mocks/repos.rs
use activity_around::domain::activity::{
    Activity, ActivityId, ActivityReadRepository, ActivitySummary, Category,
};
use activity_around::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::cmp;
use std::sync::atomic::{AtomicUsize, Ordering};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/* ---------------------------- InMemoryActivityRepo ---------------------------- */

/// Primary-strength French comparison: accents and case are ignored first and
/// only break ties, as with the `fr-FR-x-icu` collation of the `name` column.
pub fn french_name_order(a: &str, b: &str) -> cmp::Ordering {
    fn base(s: &str) -> String {
        s.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
    }
    base(a).cmp(&base(b)).then_with(|| a.cmp(b))
}

/// In-memory store honouring the ordering contract of the Postgres repository.
/// Counts calls so tests can check that a lookup never reached the store.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepo {
    items: Vec<Activity>,
    calls: AtomicUsize,
}

impl InMemoryActivityRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Activity>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn sorted_by_name<F>(&self, filter: F) -> Vec<Activity>
    where
        F: Fn(&Activity) -> bool,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut out: Vec<Activity> = self.items.iter().filter(|a| filter(a)).cloned().collect();
        out.sort_by(|a, b| french_name_order(a.name.as_str(), b.name.as_str()));
        out
    }
}

#[async_trait]
impl ActivityReadRepository for InMemoryActivityRepo {
    async fn list_by_category(&self, category: Category) -> DomainResult<Vec<Activity>> {
        Ok(self.sorted_by_name(|a| a.category == category))
    }

    async fn list_by_neighborhood(&self, neighborhood: &str) -> DomainResult<Vec<Activity>> {
        Ok(self.sorted_by_name(|a| a.neighborhood.as_deref() == Some(neighborhood)))
    }

    async fn list_summaries(&self) -> DomainResult<Vec<ActivitySummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut out: Vec<ActivitySummary> = self.items.iter().map(ActivitySummary::from).collect();
        out.sort_by_key(|s| i64::from(s.id));
        Ok(out)
    }

    async fn find_by_id(&self, id: ActivityId) -> DomainResult<Option<Activity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.iter().find(|a| a.id == id).cloned())
    }
}

/* -------------------------- UnavailableActivityRepo --------------------------- */

/// Every call fails as if the database were unreachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableActivityRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ActivityReadRepository for UnavailableActivityRepo {
    async fn list_by_category(&self, _category: Category) -> DomainResult<Vec<Activity>> {
        unavailable()
    }

    async fn list_by_neighborhood(&self, _neighborhood: &str) -> DomainResult<Vec<Activity>> {
        unavailable()
    }

    async fn list_summaries(&self) -> DomainResult<Vec<ActivitySummary>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: ActivityId) -> DomainResult<Option<Activity>> {
        unavailable()
    }
}
