/// Centralized error handling for tagsort
pub mod tagsort;

pub use tagsort::{Result, TagsortError};
