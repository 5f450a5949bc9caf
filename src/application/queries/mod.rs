pub mod activities;
pub mod sitemap;
