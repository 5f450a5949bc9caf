// src/domain/activity/grouping.rs
use std::collections::BTreeMap;

use crate::domain::activity::entity::Activity;
use crate::domain::activity::value_objects::Category;

/// Bucket for activities without a subcategory.
pub const FALLBACK_SUBCATEGORY: &str = "Autres";

/// Activities bucketed by subcategory label.
///
/// Buckets keep the relative order of the input sequence, so a name-sorted
/// input yields name-sorted buckets. Labels iterate in ascending order and the
/// fallback bucket sorts among them like any other label.
#[derive(Debug, Clone, Default)]
pub struct SubcategoryGroups {
    buckets: BTreeMap<String, Vec<Activity>>,
    total: usize,
}

impl SubcategoryGroups {
    pub fn from_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut buckets: BTreeMap<String, Vec<Activity>> = BTreeMap::new();
        let mut total = 0;

        for activity in activities {
            let label = activity
                .subcategory_label()
                .unwrap_or(FALLBACK_SUBCATEGORY)
                .to_owned();
            buckets.entry(label).or_default().push(activity);
            total += 1;
        }

        Self { buckets, total }
    }

    /// Sorted bucket labels.
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    pub fn get(&self, label: &str) -> Option<&[Activity]> {
        self.buckets.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Activity])> {
        self.buckets
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of activities across all buckets.
    pub const fn total(&self) -> usize {
        self.total
    }

    pub fn into_buckets(self) -> BTreeMap<String, Vec<Activity>> {
        self.buckets
    }
}

/// Activities of one neighborhood split by top-level category.
#[derive(Debug, Clone, Default)]
pub struct CategorySplit {
    pub sport: Vec<Activity>,
    pub intellectual: Vec<Activity>,
}

impl CategorySplit {
    pub fn from_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut split = Self::default();
        for activity in activities {
            match activity.category {
                Category::Sport => split.sport.push(activity),
                Category::Intellectual => split.intellectual.push(activity),
            }
        }
        split
    }

    pub fn total(&self) -> usize {
        self.sport.len() + self.intellectual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
