mod generate;
pub mod routes;
mod service;

pub use service::SitemapQueryService;
