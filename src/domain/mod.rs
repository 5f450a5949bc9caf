// src/domain/mod.rs
pub mod activity;
pub mod errors;
pub mod reference;
