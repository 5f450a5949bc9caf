pub mod activities;
pub mod listings;
pub mod sitemap;

pub use activities::{ActivityDto, activity_path};
pub use listings::{
    CategoryListingDto, NeighborhoodListingDto, NeighborhoodRef, SubcategoryGroupDto,
};
pub use sitemap::{ChangeFrequency, SitemapEntry};
