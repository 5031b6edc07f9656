//! Storage layer - document mapping and repositories

pub mod document;
pub mod entity;
pub mod mapper;
pub mod memory;
pub mod migrations;
pub mod repositories;
pub mod seed;

pub use memory::InMemoryContentRepository;
pub use repositories::SqlContentRepository;
