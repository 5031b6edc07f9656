//! Contract layer - public API for in-process consumers
//!
//! Transport-agnostic models, errors and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SiteContentApi;
pub use error::SiteError;
pub use model::{
    non_empty, Collection, ContentItem, HomeContent, ItemUpdate, SeoFields, SiteData,
};
