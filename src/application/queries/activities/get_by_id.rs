use super::ActivityQueryService;
use crate::{
    application::{
        dto::ActivityDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{activity::ActivityId, errors::DomainError},
};

pub struct GetActivityByIdQuery {
    pub id: i64,
}

impl ActivityQueryService {
    pub async fn get_activity_by_id(
        &self,
        query: GetActivityByIdQuery,
    ) -> ApplicationResult<ActivityDto> {
        // Non-positive ids can never exist; answer like any unknown id.
        let id = ActivityId::new(query.id).map_err(|err| match err {
            DomainError::Validation(_) => ApplicationError::not_found("activity not found"),
            other => ApplicationError::from(other),
        })?;

        let activity = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("activity not found"))?;

        Ok(self.to_dto(activity))
    }
}
