// src/domain/reference/mod.rs
//! Static navigation tables. Fixed at build time, never mutated.

pub mod city;
pub mod neighborhood;

pub use city::{CITIES, City};
pub use neighborhood::{NEIGHBORHOODS, Neighborhood};
