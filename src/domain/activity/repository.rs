use crate::domain::activity::entity::{Activity, ActivitySummary};
use crate::domain::activity::value_objects::{ActivityId, Category};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side of the activity store.
///
/// Activity lists are ordered by name using French collation; summaries are
/// ordered by id.
#[async_trait]
pub trait ActivityReadRepository: Send + Sync {
    async fn list_by_category(&self, category: Category) -> DomainResult<Vec<Activity>>;
    async fn list_by_neighborhood(&self, neighborhood: &str) -> DomainResult<Vec<Activity>>;
    async fn list_summaries(&self) -> DomainResult<Vec<ActivitySummary>>;
    async fn find_by_id(&self, id: ActivityId) -> DomainResult<Option<Activity>>;
}
