//! Transport layers: native client, JSON admin API and HTML surface

pub mod native;
pub mod rest;
pub mod state;
pub mod web;

pub use state::AppState;
