//! Asciinumeric ordering for tag-like names
//!
//! The heart of the crate is [`compare_tag_names`], a total order that
//! compares embedded numbers by value and sorts path-like separators first.
//! Everything else (segments, [`TagName`], the line-sorting API) is built on
//! top of it.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::tag::TagName;
pub use error::{Result, TagsortError};
pub use util::segment::{Segment, segments};
pub use util::sort::{compare_tag_names, compare_tag_names_sign, sort_tag_names};
