//! Site Content Module
//!
//! Marketing site over a document store: server-rendered home and detail
//! pages, a sitemap, and an authenticated admin panel with a JSON API for
//! editing the home document and the services, portfolio, blog and contact
//! collections.

// Public exports
pub mod contract;
pub use contract::{
    client::SiteContentApi, error::SiteError, Collection, ContentItem, HomeContent, ItemUpdate,
    SeoFields, SiteData,
};

pub mod config;
pub use config::SiteContentConfig;

pub mod module;
pub use module::SiteContentModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
