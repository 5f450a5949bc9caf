use super::ActivityQueryService;
use crate::{
    application::{
        dto::{NeighborhoodListingDto, NeighborhoodRef},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{activity::CategorySplit, reference::Neighborhood},
};

pub struct ListByNeighborhoodQuery {
    pub slug: String,
}

impl ActivityQueryService {
    /// Unknown slugs are rejected before the store is queried.
    pub async fn list_by_neighborhood(
        &self,
        query: ListByNeighborhoodQuery,
    ) -> ApplicationResult<NeighborhoodListingDto> {
        let neighborhood = Neighborhood::find_by_slug(&query.slug)
            .ok_or_else(|| ApplicationError::not_found("neighborhood not found"))?;

        let activities = self
            .read_repo
            .list_by_neighborhood(neighborhood.name)
            .await?;
        let split = CategorySplit::from_activities(activities);
        let total = split.total();

        Ok(NeighborhoodListingDto {
            neighborhood: neighborhood.into(),
            total,
            sport: self.to_dtos(split.sport),
            intellectual: self.to_dtos(split.intellectual),
            other_neighborhoods: neighborhood.others().map(NeighborhoodRef::from).collect(),
        })
    }
}
