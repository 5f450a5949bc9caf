use std::sync::Arc;

use crate::application::dto::ActivityDto;
use crate::application::ports::util::SlugGenerator;
use crate::domain::activity::{Activity, ActivityReadRepository};

pub struct ActivityQueryService {
    pub(super) read_repo: Arc<dyn ActivityReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl ActivityQueryService {
    pub fn new(
        read_repo: Arc<dyn ActivityReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self { read_repo, slugger }
    }

    pub(super) fn to_dto(&self, activity: Activity) -> ActivityDto {
        let slug = self.slugger.slugify(activity.name.as_str());
        ActivityDto::new(activity, slug)
    }

    pub(super) fn to_dtos(&self, activities: Vec<Activity>) -> Vec<ActivityDto> {
        activities.into_iter().map(|a| self.to_dto(a)).collect()
    }
}
