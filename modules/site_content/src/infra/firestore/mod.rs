//! Firestore document store over its REST API

pub mod codec;
pub mod repository;

pub use repository::FirestoreRepository;
