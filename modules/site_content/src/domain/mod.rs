//! Domain layer - business logic and services

pub mod admin;
pub mod auth;
pub mod format;
pub mod jsonld;
pub mod lang;
pub mod render;
pub mod repository;
pub mod routing;
pub mod service;

pub use auth::{AuthError, AuthProvider, AuthenticatedUser, SessionManager};
pub use repository::ContentRepository;
pub use routing::{DetailRoute, PageRoute};
pub use service::Service;
