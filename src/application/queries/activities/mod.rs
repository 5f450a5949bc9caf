mod by_category;
mod by_neighborhood;
mod get_by_id;
mod service;

pub use by_category::ListByCategoryQuery;
pub use by_neighborhood::ListByNeighborhoodQuery;
pub use get_by_id::GetActivityByIdQuery;
pub use service::ActivityQueryService;
