use std::collections::HashSet;

use super::ActivityQueryService;
use crate::{
    application::{
        dto::{CategoryListingDto, SubcategoryGroupDto},
        error::ApplicationResult,
    },
    domain::activity::{Category, SubcategoryGroups},
};

/// Anchor used when a label has no alphanumeric characters.
const FALLBACK_ANCHOR: &str = "section";

/// Returns `base`, or `base-2`, `base-3`... when already used on the page.
fn unique_anchor(taken: &mut HashSet<String>, base: String) -> String {
    let base = if base.is_empty() {
        FALLBACK_ANCHOR.to_string()
    } else {
        base
    };

    let mut anchor = base.clone();
    let mut n = 2;
    while !taken.insert(anchor.clone()) {
        anchor = format!("{base}-{n}");
        n += 1;
    }
    anchor
}

pub struct ListByCategoryQuery {
    pub category: Category,
}

impl ActivityQueryService {
    pub async fn list_by_category(
        &self,
        query: ListByCategoryQuery,
    ) -> ApplicationResult<CategoryListingDto> {
        let activities = self.read_repo.list_by_category(query.category).await?;
        let groups = SubcategoryGroups::from_activities(activities);
        let total = groups.total();

        tracing::debug!(
            category = %query.category,
            total,
            buckets = groups.len(),
            "grouped category listing"
        );

        let mut taken = HashSet::new();
        let groups = groups
            .into_buckets()
            .into_iter()
            .map(|(label, activities)| SubcategoryGroupDto {
                anchor: unique_anchor(&mut taken, self.slugger.slugify(&label)),
                label,
                activities: self.to_dtos(activities),
            })
            .collect();

        Ok(CategoryListingDto {
            category: query.category,
            total,
            groups,
        })
    }
}
