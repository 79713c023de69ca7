//! Core business logic modules.

pub mod entries;
pub mod export;
pub mod store;
