// src/domain/activity/entity.rs
use crate::domain::activity::value_objects::{ActivityId, ActivityName, Category, Coordinates};
use chrono::{DateTime, Utc};

/// One listed club or association.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: ActivityId,
    pub name: ActivityName,
    pub category: Category,
    pub subcategory: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub neighborhood: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Subcategory with empty strings folded into `None`.
    pub fn subcategory_label(&self) -> Option<&str> {
        self.subcategory.as_deref().filter(|s| !s.is_empty())
    }
}

/// Narrow projection used where only addressing data is needed (sitemap).
#[derive(Debug, Clone)]
pub struct ActivitySummary {
    pub id: ActivityId,
    pub name: ActivityName,
    pub updated_at: DateTime<Utc>,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            updated_at: activity.updated_at,
        }
    }
}
