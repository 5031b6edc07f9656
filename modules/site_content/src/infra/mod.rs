//! Infrastructure layer - storage backends and identity providers

pub mod auth;
pub mod firestore;
pub mod storage;
