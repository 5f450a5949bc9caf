// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_activity;

pub use error::map_sqlx;
pub use postgres_activity::PostgresActivityReadRepository;
