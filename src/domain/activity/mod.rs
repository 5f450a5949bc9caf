pub mod entity;
pub mod grouping;
pub mod repository;
pub mod value_objects;

pub use entity::{Activity, ActivitySummary};
pub use grouping::{CategorySplit, FALLBACK_SUBCATEGORY, SubcategoryGroups};
pub use repository::ActivityReadRepository;
pub use value_objects::{ActivityId, ActivityName, Category, Coordinates};
