use crate::application::dto::ActivityDto;
use crate::domain::activity::Category;
use crate::domain::reference::Neighborhood;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryGroupDto {
    pub label: String,
    /// Fragment id of the section, slug of `label`.
    pub anchor: String,
    pub activities: Vec<ActivityDto>,
}

impl SubcategoryGroupDto {
    pub fn count(&self) -> usize {
        self.activities.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListingDto {
    #[serde(serialize_with = "serialize_category")]
    pub category: Category,
    pub total: usize,
    /// Ordered by label.
    pub groups: Vec<SubcategoryGroupDto>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NeighborhoodRef {
    pub slug: &'static str,
    pub name: &'static str,
}

impl From<&Neighborhood> for NeighborhoodRef {
    fn from(value: &Neighborhood) -> Self {
        Self {
            slug: value.slug,
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodListingDto {
    pub neighborhood: NeighborhoodRef,
    pub total: usize,
    pub sport: Vec<ActivityDto>,
    pub intellectual: Vec<ActivityDto>,
    pub other_neighborhoods: Vec<NeighborhoodRef>,
}

fn serialize_category<S: serde::Serializer>(
    category: &Category,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.as_str())
}
