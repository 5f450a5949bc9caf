// src/presentation/http/controllers/mod.rs
pub mod activities;
pub mod categories;
pub mod home;
pub mod neighborhoods;
pub mod sitemap;
